/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Writes go to the database first and are then mirrored into the search
//! index.
//!
//! The database is authoritative: a write is acknowledged once its
//! transaction commits, and a failing mirror call is only logged. Reads
//! by id or criteria never touch the index; free text search never touches
//! the database.

use super::consts::REINDEX_BATCH_SIZE;
use super::criteria::{Criteria, CriteriaError, ListQuery, PageRequest};
use super::patch::merge_patch;
use super::resource::Resource;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbErr, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    SqlErr, TransactionTrait,
};
use search::{SearchError, SearchIndex};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info, warn};

const ID: &str = "id";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("A new {0} cannot already have an ID")]
    IdExists(&'static str),
    #[error("Invalid id")]
    IdNull,
    #[error("Invalid ID")]
    IdInvalid,
    #[error("Entity not found")]
    IdNotFound,
    #[error("Field `{0}` is required")]
    Required(&'static str),
    #[error("Invalid body: {0}")]
    InvalidBody(String),
    #[error("Referenced entity does not exist")]
    InvalidReference,
    #[error(transparent)]
    Criteria(#[from] CriteriaError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => ServiceError::InvalidReference,
            _ => ServiceError::Database(err),
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::InvalidBody(err.to_string())
    }
}

impl ServiceError {
    /// Caller mistakes as opposed to storage failures.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ServiceError::Database(_) | ServiceError::Search(_))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

fn into_object(body: Value) -> ServiceResult<Map<String, Value>> {
    match body {
        Value::Object(map) => Ok(map),
        other => Err(ServiceError::InvalidBody(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

fn check_required<R: Resource>(body: &Map<String, Value>) -> ServiceResult<()> {
    match R::fields()
        .into_iter()
        .find(|field| field.required && body.get(field.name).is_none_or(Value::is_null))
    {
        Some(field) => Err(ServiceError::Required(field.name)),
        None => Ok(()),
    }
}

/// The body of an update must carry the id of the path.
fn check_identity(id: i64, body: &Map<String, Value>) -> ServiceResult<()> {
    match body.get(ID) {
        None | Some(Value::Null) => Err(ServiceError::IdNull),
        Some(value) if value.as_i64() == Some(id) => Ok(()),
        Some(_) => Err(ServiceError::IdInvalid),
    }
}

async fn find_in<R, C>(conn: &C, id: i64) -> Result<Option<R::Model>, DbErr>
where
    R: Resource,
    C: ConnectionTrait,
{
    R::find().filter(R::id_column().eq(id)).one(conn).await
}

async fn mirror_upsert<R>(index: &dyn SearchIndex, model: &R::Model)
where
    R: Resource,
    R::Model: Serialize,
{
    let Some(id) = R::id_of(model) else {
        return;
    };

    let document = match serde_json::to_value(model) {
        Ok(document) => document,
        Err(e) => {
            warn!(resource = R::NAME, id, error = %e, "Failed to serialize entity for search index");
            return;
        }
    };

    if let Err(e) = index.upsert(R::NAME, id, document).await {
        warn!(resource = R::NAME, id, error = %e, "Failed to mirror entity into search index");
    }
}

async fn mirror_delete<R: Resource>(index: &dyn SearchIndex, id: i64) {
    if let Err(e) = index.delete(R::NAME, id).await {
        warn!(resource = R::NAME, id, error = %e, "Failed to remove entity from search index");
    }
}

pub async fn create<R>(
    db: &DatabaseConnection,
    index: &dyn SearchIndex,
    body: Value,
) -> ServiceResult<R::Model>
where
    R: Resource,
    R::Model: Serialize + DeserializeOwned + IntoActiveModel<R::ActiveModel> + Send + Sync,
    R::ActiveModel: ActiveModelTrait<Entity = R> + ActiveModelBehavior + Send,
{
    let mut body = into_object(body)?;

    if body.get(ID).is_some_and(|id| !id.is_null()) {
        return Err(ServiceError::IdExists(R::NAME));
    }

    check_required::<R>(&body)?;
    body.insert(ID.to_string(), Value::from(0));

    let model: R::Model = serde_json::from_value(Value::Object(body))?;
    let mut active: R::ActiveModel = model.into_active_model();
    active.not_set(R::id_column());

    let txn = db.begin().await?;
    let model = active.insert(&txn).await?;
    txn.commit().await?;

    info!(resource = R::NAME, id = R::id_of(&model), "Created entity");
    mirror_upsert::<R>(index, &model).await;

    Ok(model)
}

pub async fn update<R>(
    db: &DatabaseConnection,
    index: &dyn SearchIndex,
    id: i64,
    body: Value,
) -> ServiceResult<R::Model>
where
    R: Resource,
    R::Model: Serialize + DeserializeOwned + IntoActiveModel<R::ActiveModel> + Send + Sync,
    R::ActiveModel: ActiveModelTrait<Entity = R> + ActiveModelBehavior + Send,
{
    let body = into_object(body)?;
    check_identity(id, &body)?;
    check_required::<R>(&body)?;

    let model: R::Model = serde_json::from_value(Value::Object(body))?;

    let txn = db.begin().await?;

    if find_in::<R, _>(&txn, id).await?.is_none() {
        return Err(ServiceError::IdNotFound);
    }

    let active: R::ActiveModel = model.into_active_model();
    let model = active.reset_all().update(&txn).await?;
    txn.commit().await?;

    info!(resource = R::NAME, id, "Updated entity");
    mirror_upsert::<R>(index, &model).await;

    Ok(model)
}

pub async fn partial_update<R>(
    db: &DatabaseConnection,
    index: &dyn SearchIndex,
    id: i64,
    body: Value,
) -> ServiceResult<R::Model>
where
    R: Resource,
    R::Model: Serialize + DeserializeOwned + IntoActiveModel<R::ActiveModel> + Send + Sync,
    R::ActiveModel: ActiveModelTrait<Entity = R> + ActiveModelBehavior + Send,
{
    let patch = into_object(body)?;
    check_identity(id, &patch)?;

    let txn = db.begin().await?;

    let Some(current) = find_in::<R, _>(&txn, id).await? else {
        return Err(ServiceError::IdNotFound);
    };

    let mut merged = into_object(serde_json::to_value(&current)?)?;
    merge_patch(&mut merged, patch);
    check_required::<R>(&merged)?;

    let model: R::Model = serde_json::from_value(Value::Object(merged))?;
    let active: R::ActiveModel = model.into_active_model();
    let model = active.reset_all().update(&txn).await?;
    txn.commit().await?;

    info!(resource = R::NAME, id, "Patched entity");
    mirror_upsert::<R>(index, &model).await;

    Ok(model)
}

/// Deleting an id that does not exist is not an error.
pub async fn delete<R>(db: &DatabaseConnection, index: &dyn SearchIndex, id: i64) -> ServiceResult<()>
where
    R: Resource,
{
    let result = R::delete_many()
        .filter(R::id_column().eq(id))
        .exec(db)
        .await?;

    info!(resource = R::NAME, id, rows = result.rows_affected, "Deleted entity");
    mirror_delete::<R>(index, id).await;

    Ok(())
}

pub async fn find<R>(db: &DatabaseConnection, id: i64) -> ServiceResult<Option<R::Model>>
where
    R: Resource,
{
    Ok(find_in::<R, _>(db, id).await?)
}

/// One page of matching entities together with the total match count.
pub async fn list<R>(db: &DatabaseConnection, query: &ListQuery<R>) -> ServiceResult<(Vec<R::Model>, u64)>
where
    R: Resource,
    R::Model: Send + Sync,
{
    let condition = query.criteria.condition();
    let total = R::find().filter(condition.clone()).count(db).await?;

    let mut select = R::find().filter(condition);
    for (column, order) in &query.sort {
        select = select.order_by(*column, order.clone());
    }

    let models = select
        .order_by_asc(R::id_column())
        .offset(query.page.offset())
        .limit(query.page.size)
        .all(db)
        .await?;

    debug!(resource = R::NAME, total, returned = models.len(), "Listed entities");
    Ok((models, total))
}

pub async fn count<R>(db: &DatabaseConnection, criteria: &Criteria<R>) -> ServiceResult<u64>
where
    R: Resource,
    R::Model: Send + Sync,
{
    Ok(R::find().filter(criteria.condition()).count(db).await?)
}

/// Free text query against the search index.
pub async fn search<R>(
    index: &dyn SearchIndex,
    query: &str,
    page: PageRequest,
) -> ServiceResult<(Vec<R::Model>, u64)>
where
    R: Resource,
    R::Model: DeserializeOwned,
{
    let result = index
        .search(
            R::NAME,
            query,
            page.offset() as usize,
            page.size as usize,
        )
        .await?;

    let models = result
        .hits
        .into_iter()
        .filter_map(|hit| match serde_json::from_value(hit) {
            Ok(model) => Some(model),
            Err(e) => {
                warn!(resource = R::NAME, error = %e, "Skipping malformed search document");
                None
            }
        })
        .collect();

    Ok((models, result.total as u64))
}

/// Rebuilds the index of `R` from the database.
pub async fn reindex<R>(db: &DatabaseConnection, index: &dyn SearchIndex) -> ServiceResult<u64>
where
    R: Resource,
    R::Model: Serialize + Send + Sync,
{
    index.clear(R::NAME).await?;

    let mut pages = R::find()
        .order_by_asc(R::id_column())
        .paginate(db, REINDEX_BATCH_SIZE);
    let mut indexed = 0;

    while let Some(models) = pages.fetch_and_next().await? {
        for model in models {
            let Some(id) = R::id_of(&model) else {
                continue;
            };

            index
                .upsert(R::NAME, id, serde_json::to_value(&model)?)
                .await?;
            indexed += 1;
        }
    }

    info!(resource = R::NAME, indexed, "Rebuilt search index");
    Ok(indexed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        into_object(value).unwrap()
    }

    #[test]
    fn identity_must_match_path() {
        assert!(check_identity(3, &object(json!({"id": 3}))).is_ok());
        assert!(matches!(
            check_identity(3, &object(json!({}))),
            Err(ServiceError::IdNull)
        ));
        assert!(matches!(
            check_identity(3, &object(json!({"id": null}))),
            Err(ServiceError::IdNull)
        ));
        assert!(matches!(
            check_identity(3, &object(json!({"id": 4}))),
            Err(ServiceError::IdInvalid)
        ));
    }

    #[test]
    fn required_fields_are_checked() {
        use crate::types::ECentre;

        let complete = object(json!({"libelle": "a", "responsable": "b", "numeroTelephone": "c"}));
        assert!(check_required::<ECentre>(&complete).is_ok());

        let missing = object(json!({"libelle": "a", "responsable": null, "numeroTelephone": "c"}));
        assert!(matches!(
            check_required::<ECentre>(&missing),
            Err(ServiceError::Required("responsable"))
        ));
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(matches!(
            into_object(json!([1])),
            Err(ServiceError::InvalidBody(_))
        ));
    }
}
