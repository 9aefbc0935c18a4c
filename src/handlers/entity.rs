//! Resource CRUD handlers: list, create, update, delete. One store call per request.

use crate::error::AppError;
use crate::model::{Resource, ResourceDef};
use crate::response;
use crate::service::{CrudService, RequestValidator};
use crate::state::AppState;
use crate::store::Row;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

/// Ids are integers; anything else cannot name an existing row.
fn parse_id(def: &ResourceDef, id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::NotFound(def.not_found()))
}

fn body_to_map(body: Result<Json<Value>, JsonRejection>) -> Result<Map<String, Value>, AppError> {
    let Json(value) = body?;
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub async fn list<R: Resource>(State(state): State<AppState>) -> Result<Json<Vec<Row>>, AppError> {
    let rows = CrudService::list(state.store.as_ref(), R::DEF).await?;
    Ok(Json(rows))
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let def = R::DEF;
    let body = body_to_map(body)?;
    let values = RequestValidator::validate(def, &body)?;
    let id = CrudService::create(state.store.as_ref(), def, values).await?;
    Ok(response::created(def.added(), def.id_key, id))
}

pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let def = R::DEF;
    let body = body_to_map(body)?;
    let values = RequestValidator::validate(def, &body)?;
    let id = parse_id(def, &id_str)?;
    CrudService::update(state.store.as_ref(), def, id, values).await?;
    Ok(response::message(def.updated()))
}

pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let def = R::DEF;
    let id = parse_id(def, &id_str)?;
    CrudService::delete(state.store.as_ref(), def, id).await?;
    Ok(response::message(def.deleted()))
}
