pub mod client;
pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Full application router with state attached.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Globe ERP API" }))
        .route("/health", get(health_check))
        .nest("/api", routes::create_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
