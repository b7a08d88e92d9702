pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod output;
pub mod pairing;
pub mod sanitize;
pub mod services;

use std::sync::Arc;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::{Cli, ForumAction, TournamentAction};
use log::info;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::sanitize::Sanitizer;
use crate::services::server::ServerService;
use crate::services::{ForumStore, TournamentStore};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_init(config: &AppConfig) -> Result<()> {
    let sanitizer = Arc::new(Sanitizer::new(&config.sanitizer));

    ForumStore::open(config, sanitizer.clone())?.init_schema()?;
    TournamentStore::open(config, sanitizer)?.init_schema()?;

    info!(
        "Initialized {} and {}",
        config.database.forum_path, config.database.tournament_path
    );
    Ok(())
}

pub fn handle_forum(config: &AppConfig, action: &ForumAction) -> Result<()> {
    let sanitizer = Arc::new(Sanitizer::new(&config.sanitizer));
    let forum = ForumStore::open(config, sanitizer)?;

    match action {
        ForumAction::List => {
            let posts = forum.get_posts()?;
            println!("{}", output::format_posts(&posts));
        }
        ForumAction::Post { content } => {
            let post = forum.add_post(content)?;
            println!("Posted #{}", post.id);
        }
    }

    Ok(())
}

pub fn handle_tournament(
    config: &AppConfig,
    id: Option<i64>,
    action: &TournamentAction,
) -> Result<()> {
    let sanitizer = Arc::new(Sanitizer::new(&config.sanitizer));
    let store = TournamentStore::open(config, sanitizer)?;
    let tournament_id = id.unwrap_or(config.tournament.default_tournament_id);

    match action {
        TournamentAction::Create { name } => {
            let tournament = store.create_tournament(name)?;
            println!("{}", tournament.id);
        }
        TournamentAction::Register { name } => {
            let player = store.register_player(tournament_id, name)?;
            println!("Registered {} as player {}", player.name, player.id);
        }
        TournamentAction::Count => {
            println!("{}", store.count_players(tournament_id)?);
        }
        TournamentAction::Standings => {
            let standings = store.player_standings(tournament_id)?;
            println!("{}", output::format_standings(&standings));
        }
        TournamentAction::Report { winner, loser } => {
            let match_id = store.report_match(tournament_id, *winner, *loser)?;
            println!("Recorded match {}", match_id);
        }
        TournamentAction::Pairings => {
            let pairings = store.swiss_pairings(tournament_id)?;
            println!("{}", output::format_pairings(&pairings));
        }
        TournamentAction::DeleteMatches => {
            let removed = store.delete_matches(tournament_id)?;
            println!("Deleted {} matches", removed);
        }
        TournamentAction::DeletePlayers => {
            let removed = store.delete_players(tournament_id)?;
            println!("Deleted {} players", removed);
        }
    }

    Ok(())
}

pub fn handle_serve(port: u16, config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
}
