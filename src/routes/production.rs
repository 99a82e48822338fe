use axum::{
    routing::{get, patch},
    Router,
};
use crate::handlers::production;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/production", get(production::list_production).post(production::create_production))
        .route(
            "/production/{id}",
            patch(production::update_production_quantity).delete(production::delete_production),
        )
}
