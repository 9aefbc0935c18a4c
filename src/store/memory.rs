//! In-memory store: substitute for PostgreSQL in tests and local demos.

use super::{Row, Store};
use crate::error::StoreError;
use crate::model::{ResourceDef, ID_COLUMN};
use crate::sql::BindValue;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Vec<BindValue>>,
}

/// Tables keyed by name, rows keyed by id. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<&'static str, Table>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, every call fails with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store switched off".into()));
        }
        Ok(())
    }
}

fn to_row(def: &ResourceDef, id: i64, values: &[BindValue]) -> Row {
    let mut row = Row::new();
    row.insert(ID_COLUMN.to_string(), Value::Number(id.into()));
    for (c, v) in def.columns.iter().zip(values) {
        row.insert(c.name.to_string(), v.to_json());
    }
    row
}

#[async_trait]
impl Store for MemoryStore {
    async fn list(&self, def: &ResourceDef) -> Result<Vec<Row>, StoreError> {
        self.check()?;
        let tables = self.tables.lock().await;
        Ok(tables
            .get(def.table)
            .map(|t| t.rows.iter().map(|(id, v)| to_row(def, *id, v)).collect())
            .unwrap_or_default())
    }

    async fn insert(&self, def: &ResourceDef, values: Vec<BindValue>) -> Result<i64, StoreError> {
        self.check()?;
        let mut tables = self.tables.lock().await;
        let table = tables.entry(def.table).or_default();
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, values);
        Ok(id)
    }

    async fn update(&self, def: &ResourceDef, id: i64, values: Vec<BindValue>) -> Result<u64, StoreError> {
        self.check()?;
        let mut tables = self.tables.lock().await;
        match tables.get_mut(def.table).and_then(|t| t.rows.get_mut(&id)) {
            Some(row) => {
                *row = values;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, def: &ResourceDef, id: i64) -> Result<u64, StoreError> {
        self.check()?;
        let mut tables = self.tables.lock().await;
        let removed = tables.get_mut(def.table).and_then(|t| t.rows.remove(&id));
        Ok(u64::from(removed.is_some()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PRODUCTS, USERS};

    fn user(name: &str) -> Vec<BindValue> {
        vec![BindValue::Text(name.into()), BindValue::Text("pw".into())]
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let a = store.insert(&USERS, user("a")).await.unwrap();
        let b = store.insert(&USERS, user("b")).await.unwrap();
        assert_eq!((a, b), (1, 2));
        assert_eq!(store.delete(&USERS, b).await.unwrap(), 1);
        assert_eq!(store.delete(&USERS, b).await.unwrap(), 0);
        assert_eq!(store.insert(&USERS, user("c")).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn tables_are_independent() {
        let store = MemoryStore::new();
        store.insert(&USERS, user("a")).await.unwrap();
        assert!(store.list(&PRODUCTS).await.unwrap().is_empty());
        assert_eq!(store.update(&PRODUCTS, 1, vec![]).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unavailable_fails_every_call() {
        let store = MemoryStore::new();
        store.set_unavailable(true);
        assert!(matches!(store.list(&USERS).await, Err(StoreError::Unavailable(_))));
        assert!(store.insert(&USERS, user("a")).await.is_err());
        assert!(store.ping().await.is_err());
        store.set_unavailable(false);
        assert!(store.list(&USERS).await.unwrap().is_empty());
    }
}
