pub mod products;
pub mod conrods;
pub mod production;
pub mod bills;

use axum::Router;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(conrods::routes())
        .merge(production::routes())
        .merge(bills::routes())
}
