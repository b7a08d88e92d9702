use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "forum posts and swiss tournament store")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Create any missing tables in the forum and tournament databases
    Init,
    /// Read or write forum posts
    Forum {
        #[clap(subcommand)]
        action: ForumAction,
    },
    /// Manage a Swiss-system tournament
    Tournament {
        /// Tournament id (defaults to TOURNAMENT_ID or 1)
        #[arg(short, long)]
        id: Option<i64>,
        #[clap(subcommand)]
        action: TournamentAction,
    },
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ForumAction {
    /// List posts, newest first
    List,
    /// Add a post
    Post { content: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum TournamentAction {
    /// Create a new tournament and print its id
    Create { name: String },
    /// Register a player
    Register { name: String },
    /// Number of registered players
    Count,
    /// Players ranked by wins
    Standings,
    /// Record the result of a match
    Report { winner: i64, loser: i64 },
    /// Pairings for the next round
    Pairings,
    /// Remove all matches
    DeleteMatches,
    /// Remove all players and their matches
    DeletePlayers,
}
