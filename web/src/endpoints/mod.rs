/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod entities;
pub mod search;

use crate::error::{WebError, WebResult};
use axum::extract::Json;
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use suivi_core::consts::APPLICATION_NAME;
use suivi_core::types::BaseResponse;

pub const ALERT_HEADER: HeaderName = HeaderName::from_static("x-suivi-alert");
pub const PARAMS_HEADER: HeaderName = HeaderName::from_static("x-suivi-params");
pub const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

pub async fn handle_404() -> WebError {
    WebError::NotFound("Not Found".to_string())
}

pub async fn get_health() -> WebResult<Json<BaseResponse<String>>> {
    let res = BaseResponse {
        error: false,
        message: "200 ALIVE".to_string(),
    };

    Ok(Json(res))
}

fn header_value(value: String) -> WebResult<HeaderValue> {
    HeaderValue::try_from(value).map_err(|e| WebError::InternalServerError(e.to_string()))
}

/// `X-Suivi-Alert: suivi.<entity>.<action>` and `X-Suivi-Params: <id>`
pub fn alert_headers(entity: &str, action: &str, id: i64) -> WebResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ALERT_HEADER,
        header_value(format!("{}.{}.{}", APPLICATION_NAME, entity, action))?,
    );
    headers.insert(PARAMS_HEADER, HeaderValue::from(id));
    Ok(headers)
}

pub fn total_count_headers(total: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from(total));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_headers_name_entity_and_id() {
        let headers = alert_headers("centre", "created", 12).unwrap();

        assert_eq!(headers[ALERT_HEADER], "suivi.centre.created");
        assert_eq!(headers[PARAMS_HEADER], "12");
    }

    #[test]
    fn total_count_header() {
        assert_eq!(total_count_headers(42)[TOTAL_COUNT_HEADER], "42");
    }
}
