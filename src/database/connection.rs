use anyhow::{Context, Result};
use log::warn;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Transaction, TransactionBehavior};

use crate::config::DatabaseSettings;
use crate::errors::StoreResult;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(database_path: &str, settings: &DatabaseSettings) -> Result<DbPool> {
    let manager = build_manager(database_path, settings);
    build_pool(manager, settings)
        .with_context(|| format!("Failed to open database at {}", database_path))
}

fn build_manager(path: &str, settings: &DatabaseSettings) -> SqliteConnectionManager {
    let busy_timeout = settings.busy_timeout;
    SqliteConnectionManager::file(path).with_init(move |conn| {
        conn.busy_timeout(busy_timeout)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
    })
}

fn build_pool(manager: SqliteConnectionManager, settings: &DatabaseSettings) -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(settings.pool_size)
        .connection_timeout(settings.connection_timeout)
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}

/// Run `work` in an immediate transaction on a pooled connection. Commits on
/// success; any error rolls the whole unit back.
pub fn with_transaction<T, F>(pool: &DbPool, operation: &str, work: F) -> StoreResult<T>
where
    F: FnOnce(&Transaction) -> StoreResult<T>,
{
    let mut conn = get_connection(pool)?;
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    match work(&tx) {
        Ok(value) => {
            tx.commit()?;
            Ok(value)
        }
        Err(err) => {
            warn!("{} rolled back: {}", operation, err);
            Err(err)
        }
    }
}
