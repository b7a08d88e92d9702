use crate::services::forum::ForumStore;
use crate::services::tournament::TournamentStore;

pub mod forum;
pub mod tournaments;

pub struct AppState {
    pub forum: ForumStore,
    pub tournaments: TournamentStore,
}
