use anyhow::Result;

use swiss_forum::cli::Command;
use swiss_forum::config::AppConfig;
use swiss_forum::{
    handle_completions, handle_forum, handle_init, handle_serve, handle_tournament, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    let config = AppConfig::from_env()?;
    execute_command(&command, config)
}

fn execute_command(command: &Command, config: AppConfig) -> Result<()> {
    match command {
        Command::Init => handle_init(&config),
        Command::Forum { action } => handle_forum(&config, action),
        Command::Tournament { id, action } => handle_tournament(&config, *id, action),
        Command::Serve { port } => handle_serve(*port, config),
        Command::Completions { shell } => {
            handle_completions(*shell);
            Ok(())
        }
    }
}
