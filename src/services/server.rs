use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::create_router;
use crate::api::handlers::AppState;
use crate::config::AppConfig;
use crate::sanitize::Sanitizer;
use crate::services::forum::ForumStore;
use crate::services::tournament::TournamentStore;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let sanitizer = Arc::new(Sanitizer::new(&self.config.sanitizer));

        let state = Arc::new(AppState {
            forum: ForumStore::open(&self.config, sanitizer.clone())?,
            tournaments: TournamentStore::open(&self.config, sanitizer)?,
        });

        let app = build_app(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// API routes wrapped in the CORS and request tracing layers
pub fn build_app(state: Arc<AppState>) -> Router {
    create_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
