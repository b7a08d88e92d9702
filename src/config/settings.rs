use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;

use crate::pairing::OddPlayerPolicy;

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub forum_path: String,
    pub tournament_path: String,
    pub pool_size: u32,
    pub connection_timeout: Duration,
    pub busy_timeout: Duration,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            forum_path: "forum.db".to_string(),
            tournament_path: "tournament.db".to_string(),
            pool_size: 4,
            connection_timeout: Duration::from_secs(5),
            busy_timeout: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TournamentSettings {
    pub default_tournament_id: i64,
    pub odd_player_policy: OddPlayerPolicy,
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            default_tournament_id: 1,
            odd_player_policy: OddPlayerPolicy::Reject,
        }
    }
}

/// Allow-lists for the HTML sanitizer
#[derive(Debug, Clone)]
pub struct SanitizerSettings {
    pub allowed_tags: Vec<&'static str>,
    pub allowed_attributes: Vec<(&'static str, &'static str)>,
    pub allowed_protocols: Vec<&'static str>,
}

impl Default for SanitizerSettings {
    fn default() -> Self {
        Self {
            allowed_tags: vec![
                "a", "abbr", "acronym", "b", "blockquote", "code", "em", "i", "li", "ol", "strong",
                "ul",
            ],
            allowed_attributes: vec![
                ("a", "href"),
                ("a", "title"),
                ("abbr", "title"),
                ("acronym", "title"),
            ],
            allowed_protocols: vec!["http", "https", "mailto"],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub tournament: TournamentSettings,
    pub sanitizer: SanitizerSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by whatever is set in the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(path) = lookup("FORUM_DATABASE_PATH") {
            config.database.forum_path = path;
        }
        if let Some(path) = lookup("TOURNAMENT_DATABASE_PATH") {
            config.database.tournament_path = path;
        }
        if let Some(size) = lookup("DB_POOL_SIZE") {
            config.database.pool_size = size
                .parse()
                .with_context(|| format!("Invalid DB_POOL_SIZE: {}", size))?;
        }
        if let Some(id) = lookup("TOURNAMENT_ID") {
            config.tournament.default_tournament_id = id
                .parse()
                .with_context(|| format!("Invalid TOURNAMENT_ID: {}", id))?;
        }
        if let Some(policy) = lookup("ODD_PLAYER_POLICY") {
            config.tournament.odd_player_policy = policy.parse()?;
        }

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}
