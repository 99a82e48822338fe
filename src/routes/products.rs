use axum::{
    routing::{get, patch},
    Router,
};
use crate::handlers::product::{
    get_products, create_product, update_product_quantity, delete_product
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(get_products).post(create_product))
        .route("/products/{id}", patch(update_product_quantity).delete(delete_product))
}
