/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use search::SearchError;
use std::fmt;
use suivi_core::criteria::CriteriaError;
use suivi_core::mirror::ServiceError;
use suivi_core::types::BaseResponse;

#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    NotFound(String),
    InternalServerError(String),
    Database(DbErr),
    Search(SearchError),
    Criteria(CriteriaError),
    JsonParsing(JsonRejection),
    QueryParsing(QueryRejection),
    PathParsing(PathRejection),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::Search(err) => write!(f, "Search error: {}", err),
            WebError::Criteria(err) => write!(f, "Invalid criteria: {}", err),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
            WebError::QueryParsing(err) => write!(f, "Query parsing error: {}", err),
            WebError::PathParsing(err) => write!(f, "Path parsing error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::Search(err) => Some(err),
            WebError::Criteria(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::QueryParsing(err) => Some(err),
            WebError::PathParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Database(err)
    }
}

impl From<CriteriaError> for WebError {
    fn from(err: CriteriaError) -> Self {
        WebError::Criteria(err)
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl From<QueryRejection> for WebError {
    fn from(err: QueryRejection) -> Self {
        WebError::QueryParsing(err)
    }
}

impl From<PathRejection> for WebError {
    fn from(err: PathRejection) -> Self {
        WebError::PathParsing(err)
    }
}

impl From<ServiceError> for WebError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Database(err) => WebError::Database(err),
            ServiceError::Search(err) => WebError::Search(err),
            ServiceError::Criteria(err) => WebError::Criteria(err),
            // updates of unknown ids are identity errors, not lookups
            err => WebError::BadRequest(err.to_string()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            WebError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            WebError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            WebError::Search(err) => {
                tracing::error!("Search error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Search index error".to_string(),
                )
            }
            WebError::Criteria(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            WebError::JsonParsing(err) => {
                (StatusCode::BAD_REQUEST, format!("Invalid JSON: {}", err))
            }
            WebError::QueryParsing(err) => {
                (StatusCode::BAD_REQUEST, format!("Invalid query: {}", err))
            }
            WebError::PathParsing(err) => (err.status(), format!("Invalid path: {}", err)),
        };

        let body = Json(BaseResponse {
            error: true,
            message: error_message,
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    pub fn not_found(resource: &str) -> Self {
        WebError::NotFound(format!("{} not found", resource))
    }

    pub fn missing_param(name: &str) -> Self {
        WebError::BadRequest(format!("Missing query parameter `{}`", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status() {
        let cases = [
            (ServiceError::IdExists("centre"), StatusCode::BAD_REQUEST),
            (ServiceError::IdNull, StatusCode::BAD_REQUEST),
            (ServiceError::IdInvalid, StatusCode::BAD_REQUEST),
            (ServiceError::IdNotFound, StatusCode::BAD_REQUEST),
            (ServiceError::Required("libelle"), StatusCode::BAD_REQUEST),
            (ServiceError::InvalidReference, StatusCode::BAD_REQUEST),
            (
                ServiceError::Criteria(CriteriaError::UnknownField("x".to_string())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::Database(DbErr::Custom("boom".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(WebError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn not_found_is_404() {
        let response = WebError::not_found("Centre").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
