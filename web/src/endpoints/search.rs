/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::entities::Params;
use super::total_count_headers;
use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use suivi_core::criteria::PageRequest;
use suivi_core::mirror;
use suivi_core::resource::Resource;
use suivi_core::types::*;

/// `GET /api/_search/<entities>?query=...`, answered by the search index
/// alone.
pub async fn get_search<R>(
    state: State<Arc<ServerState>>,
    params: Params,
) -> WebResult<(HeaderMap, Json<BaseResponse<Vec<R::Model>>>)>
where
    R: Resource,
    R::Model: Serialize + DeserializeOwned,
{
    let Query(params) = params?;
    let query = params
        .iter()
        .rev()
        .find(|(key, _)| key == "query")
        .map(|(_, value)| value.as_str())
        .ok_or_else(|| WebError::missing_param("query"))?;
    let page = PageRequest::parse(&params, state.cli.max_page_size)?;

    let (models, total) = mirror::search::<R>(state.index.as_ref(), query, page).await?;

    let res = BaseResponse {
        error: false,
        message: models,
    };

    Ok((total_count_headers(total), Json(res)))
}
