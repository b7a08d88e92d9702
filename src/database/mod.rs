pub mod connection;
pub mod matches;
pub mod models;
pub mod players;
pub mod posts;
pub mod setup;
pub mod tournaments;

pub use connection::{create_pool, get_connection, with_transaction, DbConn, DbPool};
pub use models::*;
