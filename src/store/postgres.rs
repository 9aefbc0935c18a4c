//! PostgreSQL store over a shared `PgPool`.

use super::{Row, Store};
use crate::error::StoreError;
use crate::model::ResourceDef;
use crate::sql::{self, BindValue, QueryBuf};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

fn bind_all(q: &QueryBuf) -> Query<'_, Postgres, PgArguments> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = match p {
            BindValue::Null => query.bind(None::<String>),
            BindValue::Text(s) => query.bind(s.as_str()),
            BindValue::Float(f) => query.bind(*f),
            BindValue::Integer(n) => query.bind(*n),
        };
    }
    query
}

#[async_trait]
impl Store for PgStore {
    async fn list(&self, def: &ResourceDef) -> Result<Vec<Row>, StoreError> {
        let q = sql::select_all(def);
        let rows = bind_all(&q).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }

    async fn insert(&self, def: &ResourceDef, values: Vec<BindValue>) -> Result<i64, StoreError> {
        use sqlx::Row as _;
        let q = sql::insert(def, values);
        let row = bind_all(&q).fetch_one(&self.pool).await?;
        Ok(row.try_get::<i64, _>(0)?)
    }

    async fn update(&self, def: &ResourceDef, id: i64, values: Vec<BindValue>) -> Result<u64, StoreError> {
        let q = sql::update(def, id, values);
        let done = bind_all(&q).execute(&self.pool).await?;
        Ok(done.rows_affected())
    }

    async fn delete(&self, def: &ResourceDef, id: i64) -> Result<u64, StoreError> {
        let q = sql::delete(def, id);
        let done = bind_all(&q).execute(&self.pool).await?;
        Ok(done.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Every selected column is cast to int8, float8 or text, so three decoders suffice.
fn row_to_json(row: &PgRow) -> Row {
    use sqlx::Column;
    use sqlx::Row as _;
    let mut map = Row::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    map
}

fn cell_to_value(row: &PgRow, name: &str) -> Value {
    use sqlx::Row as _;
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<f64>, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    Value::Null
}
