use anyhow::{Context, Result};
use rusqlite::Connection;

/// Bootstrap DDL for the schema each store expects to already exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Forum,
    Tournament,
}

impl Schema {
    fn sql(self) -> &'static str {
        match self {
            Schema::Forum => include_str!("forum.sql"),
            Schema::Tournament => include_str!("tournament.sql"),
        }
    }
}

/// Create any missing tables and views. Existing data is left untouched.
pub fn apply_schema(conn: &Connection, schema: Schema) -> Result<()> {
    conn.execute_batch(schema.sql())
        .with_context(|| format!("Failed to apply {:?} schema", schema))?;

    log::info!("{:?} schema ready", schema);
    Ok(())
}
