use axum::{routing::get, Router};

pub mod orders;
pub mod products;
pub mod stats;
pub mod system;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/orders", orders::router())
        .nest("/stats", stats::router())
}
