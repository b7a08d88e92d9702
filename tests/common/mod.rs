#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use rusqlite::Connection;
use swiss_forum::config::AppConfig;
use swiss_forum::pairing::OddPlayerPolicy;
use swiss_forum::sanitize::Sanitizer;
use swiss_forum::services::{ForumStore, TournamentStore};
use tempfile::TempDir;

pub struct Stores {
    _dir: TempDir,
    pub forum_path: PathBuf,
    pub tournament_path: PathBuf,
    pub forum: ForumStore,
    pub tournaments: TournamentStore,
}

impl Stores {
    /// Direct connection to the tournament database, bypassing the store
    pub fn raw_tournament(&self) -> Connection {
        let conn = Connection::open(&self.tournament_path).unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        conn
    }

    pub fn raw_forum(&self) -> Connection {
        Connection::open(&self.forum_path).unwrap()
    }

    pub fn count_rows(&self, table: &str) -> i64 {
        self.raw_tournament()
            .query_row(&format!("SELECT count(*) FROM {}", table), [], |row| row.get(0))
            .unwrap()
    }
}

pub fn open_stores() -> Stores {
    open_stores_with(OddPlayerPolicy::Reject)
}

pub fn open_stores_with(policy: OddPlayerPolicy) -> Stores {
    let dir = tempfile::tempdir().unwrap();
    let forum_path = dir.path().join("forum.db");
    let tournament_path = dir.path().join("tournament.db");

    let mut config = AppConfig::new();
    config.database.forum_path = forum_path.to_string_lossy().into_owned();
    config.database.tournament_path = tournament_path.to_string_lossy().into_owned();
    config.database.pool_size = 2;
    config.tournament.odd_player_policy = policy;

    let sanitizer = Arc::new(Sanitizer::new(&config.sanitizer));
    let forum = ForumStore::open(&config, sanitizer.clone()).unwrap();
    let tournaments = TournamentStore::open(&config, sanitizer).unwrap();
    forum.init_schema().unwrap();
    tournaments.init_schema().unwrap();

    Stores {
        _dir: dir,
        forum_path,
        tournament_path,
        forum,
        tournaments,
    }
}
