//! Router assembly

use crate::handlers;
use crate::middleware::log_requests;
use crate::services::QuoteService;
use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<QuoteService>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        .merge(quote_routes())
        // Layers
        .layer(middleware::from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn quote_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/quotes",
            get(handlers::quotes::list).post(handlers::quotes::create),
        )
        .route("/quotes/random", get(handlers::quotes::random))
        .route("/quotes/:id", delete(handlers::quotes::delete))
}
