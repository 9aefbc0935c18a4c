//! Resource routes: an explicit (method, path) -> handler table per entity.

use crate::handlers::entity::{create, delete, list, update};
use crate::model::{Products, Users};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

/// Mounted under `/api` by [`crate::routes::app`].
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list::<Users>).post(create::<Users>))
        .route("/users/:id", put(update::<Users>).delete(delete::<Users>))
        .route("/products", get(list::<Products>).post(create::<Products>))
        .route("/products/:id", put(update::<Products>).delete(delete::<Products>))
        .with_state(state)
}
