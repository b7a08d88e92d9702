pub mod forum;
pub mod server;
pub mod tournament;

pub use forum::ForumStore;
pub use tournament::TournamentStore;
