/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Search-index mirror of the relational store.
//!
//! Every entity written to the database is forwarded here as a full JSON
//! document keyed by its id. The `/api/_search/...` endpoints read from this
//! index only.

pub mod meili;
pub mod memory;

pub use meili::MeiliIndex;
pub use memory::MemoryIndex;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Name of the document attribute holding the entity id.
pub const ID_FIELD: &str = "id";

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("meilisearch error: {0}")]
    Meilisearch(#[from] meilisearch_sdk::errors::Error),
    #[error("meilisearch task failed: {0}")]
    TaskFailed(meilisearch_sdk::errors::MeilisearchError),
    #[error("document for id {0} is not a JSON object")]
    InvalidDocument(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub hits: Vec<Value>,
    pub total: usize,
}

#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Inserts or fully replaces the document stored under `id`.
    async fn upsert(&self, index: &str, id: i64, document: Value) -> Result<(), SearchError>;
    async fn delete(&self, index: &str, id: i64) -> Result<(), SearchError>;
    async fn search(
        &self,
        index: &str,
        query: &str,
        offset: usize,
        limit: usize,
    ) -> Result<SearchPage, SearchError>;
    /// Removes every document of `index`.
    async fn clear(&self, index: &str) -> Result<(), SearchError>;
}

pub type SharedIndex = Arc<dyn SearchIndex>;

/// Forces the `id` attribute of `document` to `id`.
pub(crate) fn with_id(mut document: Value, id: i64) -> Result<Value, SearchError> {
    match document.as_object_mut() {
        Some(map) => {
            map.insert(ID_FIELD.to_string(), Value::from(id));
            Ok(document)
        }
        None => Err(SearchError::InvalidDocument(id)),
    }
}
