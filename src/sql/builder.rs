//! Builds parameterized SELECT, INSERT, UPDATE, DELETE from a resource definition.

use crate::model::{ColumnKind, ResourceDef, ID_COLUMN};
use crate::sql::BindValue;

/// Quote identifier for PostgreSQL (safe: only from static definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn pg_type(kind: ColumnKind) -> &'static str {
    match kind {
        ColumnKind::Text => "text",
        ColumnKind::Float => "float8",
        ColumnKind::Integer => "int8",
    }
}

/// One statement plus its positional arguments (`$1` is `params[0]`).
#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// SELECT list with every column cast to the type the row decoder expects.
fn select_column_list(def: &ResourceDef) -> String {
    let mut cols = vec![format!("{}::int8 AS {}", quoted(ID_COLUMN), quoted(ID_COLUMN))];
    for c in def.columns {
        let q = quoted(c.name);
        cols.push(format!("{}::{} AS {}", q, pg_type(c.kind), q));
    }
    cols.join(", ")
}

/// SELECT every row, ordered by id.
pub fn select_all(def: &ResourceDef) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(def),
        quoted(def.table),
        quoted(ID_COLUMN)
    );
    q
}

/// INSERT all mutable columns; `values` are in `def.columns` order. Returns the generated id.
pub fn insert(def: &ResourceDef, values: Vec<BindValue>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::with_capacity(def.columns.len());
    let mut placeholders = Vec::with_capacity(def.columns.len());
    for (c, v) in def.columns.iter().zip(values) {
        let n = q.push_param(v);
        cols.push(quoted(c.name));
        placeholders.push(format!("${}::{}", n, pg_type(c.kind)));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}::int8",
        quoted(def.table),
        cols.join(", "),
        placeholders.join(", "),
        quoted(ID_COLUMN)
    );
    q
}

/// UPDATE every mutable column of the row with `id`. Full replace; no partial updates.
pub fn update(def: &ResourceDef, id: i64, values: Vec<BindValue>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::with_capacity(def.columns.len());
    for (c, v) in def.columns.iter().zip(values) {
        let n = q.push_param(v);
        sets.push(format!("{} = ${}::{}", quoted(c.name), n, pg_type(c.kind)));
    }
    let id_param = q.push_param(BindValue::Integer(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${}::int8",
        quoted(def.table),
        sets.join(", "),
        quoted(ID_COLUMN),
        id_param
    );
    q
}

/// DELETE the row with `id`.
pub fn delete(def: &ResourceDef, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let id_param = q.push_param(BindValue::Integer(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${}::int8",
        quoted(def.table),
        quoted(ID_COLUMN),
        id_param
    );
    q
}
