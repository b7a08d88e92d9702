use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::{MatchId, Outcome, PlayerId, Standing, TournamentId};

pub fn insert_match(conn: &Connection, tournament_id: TournamentId) -> Result<MatchId> {
    let sql = "INSERT INTO matches (tournament_id) VALUES (?1) RETURNING id";

    conn.query_row(sql, params![tournament_id], |row| row.get(0))
        .context("Failed to insert match")
}

pub fn insert_result(
    conn: &Connection,
    match_id: MatchId,
    player_id: PlayerId,
    outcome: Outcome,
) -> Result<()> {
    let sql = "INSERT INTO match_results (match_id, player_id, score) VALUES (?1, ?2, ?3)";

    conn.execute(sql, params![match_id, player_id, outcome.score()])
        .with_context(|| format!("Failed to record result of match {} for player {}", match_id, player_id))?;
    Ok(())
}

/// Remove every match of the tournament together with its results.
/// Returns the number of matches removed.
pub fn delete_by_tournament(conn: &Connection, tournament_id: TournamentId) -> Result<usize> {
    let results_sql = "DELETE FROM match_results WHERE match_id IN (SELECT id FROM matches WHERE tournament_id = ?1)";
    let matches_sql = "DELETE FROM matches WHERE tournament_id = ?1";

    conn.execute(results_sql, params![tournament_id])
        .context("Failed to delete match results")?;
    conn.execute(matches_sql, params![tournament_id])
        .context("Failed to delete matches")
}

pub fn standings(conn: &Connection, tournament_id: TournamentId) -> Result<Vec<Standing>> {
    let sql = "
        SELECT tournament_players.player_id,
            players.name,
            coalesce(sum(player_matches.score), 0) AS wins,
            count(player_matches.player_id) AS match_count
        FROM tournament_players
        LEFT JOIN (
            SELECT match_results.player_id, match_results.score
            FROM matches
            JOIN match_results ON (matches.id = match_results.match_id)
            WHERE matches.tournament_id = ?1
        ) AS player_matches
            ON (tournament_players.player_id = player_matches.player_id)
        JOIN players
            ON (tournament_players.player_id = players.id)
        WHERE tournament_players.tournament_id = ?1
        GROUP BY tournament_players.player_id, players.name
        ORDER BY wins DESC, tournament_players.player_id ASC
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], |row| {
            Ok(Standing {
                player_id: row.get(0)?,
                name: row.get(1)?,
                wins: row.get(2)?,
                matches: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to compute standings")?;

    Ok(rows)
}
