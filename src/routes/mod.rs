//! Router assembly: resource routes, common routes, and the middleware stack.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::config::Settings;
use crate::handlers::log_request;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, http::HeaderValue, middleware, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Maximum accepted request body, in bytes. Enforced by the `Json` extractor, so an
/// oversized body is rejected through [`crate::error::AppError`].
pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

fn cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Full application router.
pub fn app(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", api_routes(state))
        .layer(middleware::from_fn(log_request))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(cors_layer(settings))
}
