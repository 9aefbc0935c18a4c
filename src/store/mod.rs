//! Data store collaborator: one statement per call, no transactions, no retries.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::StoreError;
use crate::model::ResourceDef;
use crate::sql::BindValue;
use async_trait::async_trait;

/// A listed record: flat JSON object with `id` and every column of the resource.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Persistence for resources described by [`ResourceDef`]. `values` are always in
/// `def.columns` order and already validated.
#[async_trait]
pub trait Store: Send + Sync {
    async fn list(&self, def: &ResourceDef) -> Result<Vec<Row>, StoreError>;

    /// Insert one row and return the store-assigned id.
    async fn insert(&self, def: &ResourceDef, values: Vec<BindValue>) -> Result<i64, StoreError>;

    /// Replace all mutable columns of `id`. Returns the affected-row count.
    async fn update(&self, def: &ResourceDef, id: i64, values: Vec<BindValue>) -> Result<u64, StoreError>;

    /// Hard delete. Returns the affected-row count.
    async fn delete(&self, def: &ResourceDef, id: i64) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
