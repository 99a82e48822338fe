mod api;
mod error;
mod store;
pub mod views;

pub use api::ApiClient;
pub use error::ClientError;
pub use store::WorkshopStore;
