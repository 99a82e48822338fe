use axum::{
    routing::{get, delete},
    Router,
};
use crate::handlers::conrod;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/conrods", get(conrod::list_conrods).post(conrod::create_conrod))
        .route("/conrods/{id}", delete(conrod::delete_conrod))
}
