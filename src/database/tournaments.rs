use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{Tournament, TournamentId};

pub fn insert_tournament(conn: &Connection, name: &str) -> Result<Tournament> {
    let sql = "INSERT INTO tournaments (name) VALUES (?1) RETURNING id, name";

    conn.query_row(sql, params![name], parse_tournament_row)
        .context("Failed to insert new tournament")
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

pub fn find_by_id(conn: &Connection, id: TournamentId) -> Result<Option<Tournament>> {
    let sql = "SELECT id, name FROM tournaments WHERE id = ?1";

    conn.query_row(sql, params![id], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by id")
}

/// Registered player count from the `player_count` view. `None` when the
/// view has no row for the tournament.
pub fn count_players(conn: &Connection, id: TournamentId) -> Result<Option<i64>> {
    let sql = "SELECT num FROM player_count WHERE tournament_id = ?1";

    conn.query_row(sql, params![id], |row| row.get(0))
        .optional()
        .context("Failed to read player_count")
}
