use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::Post;

pub fn insert_post(conn: &Connection, content: &str) -> Result<Post> {
    let sql = "INSERT INTO posts (content) VALUES (?1) RETURNING id, content, time";

    conn.query_row(sql, params![content], parse_post_row)
        .context("Failed to insert post")
}

fn parse_post_row(row: &rusqlite::Row) -> rusqlite::Result<Post> {
    Ok(Post {
        id: row.get(0)?,
        content: row.get(1)?,
        time: row.get(2)?,
    })
}

/// All posts, most recent first
pub fn list_recent(conn: &Connection) -> Result<Vec<Post>> {
    let sql = "SELECT id, content, time FROM posts ORDER BY time DESC, id DESC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_post_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list posts")?;

    Ok(rows)
}
