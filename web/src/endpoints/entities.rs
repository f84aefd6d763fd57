/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! CRUD handlers shared by every exposed entity.

use super::{alert_headers, total_count_headers};
use crate::error::{WebError, WebResult};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::Json;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, IntoActiveModel};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use suivi_core::criteria::{Criteria, ListQuery};
use suivi_core::mirror;
use suivi_core::resource::Resource;
use suivi_core::types::*;

pub type Params = Result<Query<Vec<(String, String)>>, QueryRejection>;
pub type Body = Result<Json<Value>, JsonRejection>;
pub type Id = Result<Path<i64>, PathRejection>;

pub async fn get_entities<R>(
    state: State<Arc<ServerState>>,
    params: Params,
) -> WebResult<(HeaderMap, Json<BaseResponse<Vec<R::Model>>>)>
where
    R: Resource,
    R::Model: Serialize + Send + Sync,
{
    let Query(params) = params?;
    let query = ListQuery::<R>::parse(&params, state.cli.max_page_size)?;
    let (models, total) = mirror::list::<R>(&state.db, &query).await?;

    let res = BaseResponse {
        error: false,
        message: models,
    };

    Ok((total_count_headers(total), Json(res)))
}

pub async fn get_count<R>(
    state: State<Arc<ServerState>>,
    params: Params,
) -> WebResult<Json<BaseResponse<u64>>>
where
    R: Resource,
    R::Model: Send + Sync,
{
    let Query(params) = params?;
    let criteria = Criteria::<R>::parse(&params)?;
    let count = mirror::count::<R>(&state.db, &criteria).await?;

    let res = BaseResponse {
        error: false,
        message: count,
    };

    Ok(Json(res))
}

pub async fn get_entity<R>(
    state: State<Arc<ServerState>>,
    id: Id,
) -> WebResult<Json<BaseResponse<R::Model>>>
where
    R: Resource,
    R::Model: Serialize,
{
    let Path(id) = id?;
    let model = mirror::find::<R>(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found(R::LABEL))?;

    let res = BaseResponse {
        error: false,
        message: model,
    };

    Ok(Json(res))
}

pub async fn post_entities<R>(
    state: State<Arc<ServerState>>,
    body: Body,
) -> WebResult<(StatusCode, HeaderMap, Json<BaseResponse<R::Model>>)>
where
    R: Resource,
    R::Model: Serialize + DeserializeOwned + IntoActiveModel<R::ActiveModel> + Send + Sync,
    R::ActiveModel: ActiveModelTrait<Entity = R> + ActiveModelBehavior + Send,
{
    let Json(body) = body?;
    let model = mirror::create::<R>(&state.db, state.index.as_ref(), body).await?;
    let id = R::id_of(&model).unwrap_or_default();

    let mut headers = alert_headers(R::NAME, "created", id)?;
    let location = format!("/api/{}/{}", R::PATH, id);
    headers.insert(
        LOCATION,
        HeaderValue::try_from(location).map_err(|e| WebError::InternalServerError(e.to_string()))?,
    );

    let res = BaseResponse {
        error: false,
        message: model,
    };

    Ok((StatusCode::CREATED, headers, Json(res)))
}

pub async fn put_entity<R>(
    state: State<Arc<ServerState>>,
    id: Id,
    body: Body,
) -> WebResult<(HeaderMap, Json<BaseResponse<R::Model>>)>
where
    R: Resource,
    R::Model: Serialize + DeserializeOwned + IntoActiveModel<R::ActiveModel> + Send + Sync,
    R::ActiveModel: ActiveModelTrait<Entity = R> + ActiveModelBehavior + Send,
{
    let Path(id) = id?;
    let Json(body) = body?;
    let model = mirror::update::<R>(&state.db, state.index.as_ref(), id, body).await?;

    let res = BaseResponse {
        error: false,
        message: model,
    };

    Ok((alert_headers(R::NAME, "updated", id)?, Json(res)))
}

pub async fn patch_entity<R>(
    state: State<Arc<ServerState>>,
    id: Id,
    body: Body,
) -> WebResult<(HeaderMap, Json<BaseResponse<R::Model>>)>
where
    R: Resource,
    R::Model: Serialize + DeserializeOwned + IntoActiveModel<R::ActiveModel> + Send + Sync,
    R::ActiveModel: ActiveModelTrait<Entity = R> + ActiveModelBehavior + Send,
{
    let Path(id) = id?;
    let Json(body) = body?;
    let model = mirror::partial_update::<R>(&state.db, state.index.as_ref(), id, body).await?;

    let res = BaseResponse {
        error: false,
        message: model,
    };

    Ok((alert_headers(R::NAME, "updated", id)?, Json(res)))
}

pub async fn delete_entity<R>(
    state: State<Arc<ServerState>>,
    id: Id,
) -> WebResult<(StatusCode, HeaderMap)>
where
    R: Resource,
{
    let Path(id) = id?;
    mirror::delete::<R>(&state.db, state.index.as_ref(), id).await?;

    Ok((StatusCode::NO_CONTENT, alert_headers(R::NAME, "deleted", id)?))
}
