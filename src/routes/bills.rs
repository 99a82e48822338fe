use axum::{
    routing::{get, delete},
    Router,
};
use crate::handlers::bill;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bills", get(bill::list_bills).post(bill::create_bill))
        .route("/bills/{id}", delete(bill::delete_bill))
}
