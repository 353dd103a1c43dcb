pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod presenter;
pub mod transactions;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::handler::get_transactions;

#[derive(Debug, Clone)]
pub struct AppState {
    pub transactions_path: PathBuf,
}

/// Any origin, method and header, with credentials. `*` can't be paired
/// with credentials, so everything is echoed back from the request.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn app(state: AppState) -> Router {
    let middleware_stack = ServiceBuilder::new().layer(cors_layer());

    Router::new()
        .route("/api/transactions", get(get_transactions))
        .with_state(Arc::new(state))
        .layer(middleware_stack)
}
