use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::{Player, PlayerId, TournamentId};

pub fn insert_player(conn: &Connection, name: &str) -> Result<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name";

    conn.query_row(sql, params![name], parse_player_row)
        .context("Failed to insert new player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

pub fn enroll(conn: &Connection, player_id: PlayerId, tournament_id: TournamentId) -> Result<()> {
    let sql = "INSERT INTO tournament_players (player_id, tournament_id) VALUES (?1, ?2)";

    conn.execute(sql, params![player_id, tournament_id])
        .with_context(|| format!("Failed to enroll player {} in tournament {}", player_id, tournament_id))?;
    Ok(())
}

pub fn is_enrolled(conn: &Connection, tournament_id: TournamentId, player_id: PlayerId) -> Result<bool> {
    let sql = "SELECT EXISTS (SELECT 1 FROM tournament_players WHERE tournament_id = ?1 AND player_id = ?2)";

    conn.query_row(sql, params![tournament_id, player_id], |row| row.get(0))
        .context("Failed to check tournament enrollment")
}

/// Remove every enrollment of the tournament, returning the affected players
pub fn withdraw_all(conn: &Connection, tournament_id: TournamentId) -> Result<Vec<PlayerId>> {
    let sql = "DELETE FROM tournament_players WHERE tournament_id = ?1 RETURNING player_id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to withdraw tournament players")?;

    Ok(rows)
}

/// Delete the player unless still enrolled in some tournament. Returns
/// whether a row was removed.
pub fn delete_if_unenrolled(conn: &Connection, player_id: PlayerId) -> Result<bool> {
    let sql = "DELETE FROM players WHERE id = ?1 AND NOT EXISTS (SELECT 1 FROM tournament_players WHERE player_id = ?1)";

    let deleted = conn
        .execute(sql, params![player_id])
        .with_context(|| format!("Failed to delete player {}", player_id))?;
    Ok(deleted > 0)
}
