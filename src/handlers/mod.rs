//! HTTP handlers for resource CRUD and request logging.

pub mod entity;
pub mod request_log;
pub use entity::*;
pub use request_log::log_request;
