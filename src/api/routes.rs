use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{forum, tournaments, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/posts", get(forum::get_posts).post(forum::add_post))
        .route("/api/tournaments", post(tournaments::create_tournament))
        .route("/api/tournaments/:id/players/count", get(tournaments::count_players))
        .route(
            "/api/tournaments/:id/players",
            post(tournaments::register_player).delete(tournaments::delete_players),
        )
        .route("/api/tournaments/:id/standings", get(tournaments::get_standings))
        .route("/api/tournaments/:id/pairings", get(tournaments::get_pairings))
        .route(
            "/api/tournaments/:id/matches",
            post(tournaments::report_match).delete(tournaments::delete_matches),
        )
        .with_state(state)
}
