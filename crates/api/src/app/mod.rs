//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store wiring (Postgres or in-memory, selected via env)
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request DTOs and query-parameter parsing
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app(jwt_secret: String) -> Router {
    let services = Arc::new(services::build_services().await);
    build_app_with_services(jwt_secret, services)
}

/// Build the router against explicit services (tests seed stores this way).
pub fn build_app_with_services(jwt_secret: String, services: Arc<services::AppServices>) -> Router {
    let verifier = Arc::new(vendora_auth::Hs256TokenCodec::new(jwt_secret.as_bytes()));
    let auth_state = middleware::AuthState { verifier };

    // Protected routes: require a valid bearer token.
    let protected = routes::router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    // The catalog listing is public; it shares the service extension with
    // the protected tree.
    Router::new()
        .route("/health", get(routes::system::health))
        .route("/products", get(routes::products::list_products))
        .merge(protected)
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
