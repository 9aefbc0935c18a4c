//! CRUD API: users and products over HTTP, backed by a SQL store.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{DatabaseSettings, Settings};
pub use error::{AppError, ConfigError, StoreError};
pub use model::{Products, Resource, ResourceDef, Users, PRODUCTS, USERS};
pub use routes::{api_routes, app, common_routes};
pub use service::{CrudService, RequestValidator};
pub use state::AppState;
pub use store::{MemoryStore, PgStore, Store};
