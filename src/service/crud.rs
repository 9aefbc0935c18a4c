//! CRUD execution against the injected store; maps outcomes to client-facing errors.

use crate::error::AppError;
use crate::model::ResourceDef;
use crate::sql::BindValue;
use crate::store::{Row, Store};

pub struct CrudService;

impl CrudService {
    /// All rows of the resource. An empty table yields an empty vec.
    pub async fn list(store: &dyn Store, def: &ResourceDef) -> Result<Vec<Row>, AppError> {
        store
            .list(def)
            .await
            .map_err(|e| AppError::store(def.fetch_failed(), e))
    }

    /// Insert one validated row. Returns the store-assigned id.
    pub async fn create(store: &dyn Store, def: &ResourceDef, values: Vec<BindValue>) -> Result<i64, AppError> {
        store
            .insert(def, values)
            .await
            .map_err(|e| AppError::store(def.add_failed(), e))
    }

    /// Replace all mutable columns of `id`. Zero affected rows means the id does not exist.
    pub async fn update(
        store: &dyn Store,
        def: &ResourceDef,
        id: i64,
        values: Vec<BindValue>,
    ) -> Result<(), AppError> {
        let affected = store
            .update(def, id, values)
            .await
            .map_err(|e| AppError::store(def.update_failed(), e))?;
        if affected == 0 {
            return Err(AppError::NotFound(def.not_found()));
        }
        Ok(())
    }

    /// Hard delete of `id`. A second delete of the same id is a 404.
    pub async fn delete(store: &dyn Store, def: &ResourceDef, id: i64) -> Result<(), AppError> {
        let affected = store
            .delete(def, id)
            .await
            .map_err(|e| AppError::store(def.delete_failed(), e))?;
        if affected == 0 {
            return Err(AppError::NotFound(def.not_found()));
        }
        Ok(())
    }
}
