/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Meilisearch backed index. Writes wait for the Meilisearch task to finish,
//! so a request only returns once the mirror has applied the change.

use super::{ID_FIELD, SearchError, SearchIndex, SearchPage, with_id};
use async_trait::async_trait;
use meilisearch_sdk::client::Client;
use meilisearch_sdk::errors::{Error as MeiliError, ErrorCode, MeilisearchError};
use meilisearch_sdk::task_info::TaskInfo;
use meilisearch_sdk::tasks::{FailedTask, Task};
use serde_json::Value;

pub struct MeiliIndex {
    client: Client,
}

impl MeiliIndex {
    pub fn new(url: &str, api_key: Option<&str>) -> Result<Self, SearchError> {
        let client = Client::new(url, api_key)?;
        Ok(Self { client })
    }

    async fn wait(&self, task: TaskInfo) -> Result<(), SearchError> {
        match task.wait_for_completion(&self.client, None, None).await? {
            Task::Failed {
                content: FailedTask { error, .. },
            } => Err(SearchError::TaskFailed(error)),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl SearchIndex for MeiliIndex {
    async fn upsert(&self, index: &str, id: i64, document: Value) -> Result<(), SearchError> {
        let document = with_id(document, id)?;
        let task = self
            .client
            .index(index)
            .add_or_update(&[document], Some(ID_FIELD))
            .await?;

        tracing::debug!(index, id, task = task.task_uid, "queued meilisearch upsert");
        self.wait(task).await
    }

    async fn delete(&self, index: &str, id: i64) -> Result<(), SearchError> {
        let task = self.client.index(index).delete_document(id).await?;
        self.wait(task).await
    }

    async fn search(
        &self,
        index: &str,
        query: &str,
        offset: usize,
        limit: usize,
    ) -> Result<SearchPage, SearchError> {
        let query = normalize_query(query);
        let index = self.client.index(index);

        let results = match index
            .search()
            .with_query(query)
            .with_offset(offset)
            .with_limit(limit)
            .execute::<Value>()
            .await
        {
            Ok(results) => results,
            Err(err) if is_index_not_found(&err) => {
                return Ok(SearchPage {
                    hits: Vec::new(),
                    total: 0,
                });
            }
            Err(err) => return Err(err.into()),
        };

        let total = results
            .estimated_total_hits
            .or(results.total_hits)
            .unwrap_or(results.hits.len());

        Ok(SearchPage {
            hits: results.hits.into_iter().map(|hit| hit.result).collect(),
            total,
        })
    }

    async fn clear(&self, index: &str) -> Result<(), SearchError> {
        let task = self.client.index(index).delete_all_documents().await?;

        match self.wait(task).await {
            Err(err) if is_missing_index(&err) => {
                tracing::debug!(index, "meilisearch index does not exist yet");
                Ok(())
            }
            result => result,
        }
    }
}

/// Meilisearch has no wildcard term, the empty query returns everything.
fn normalize_query(query: &str) -> &str {
    match query.trim() {
        "*" => "",
        trimmed => trimmed,
    }
}

fn is_index_not_found(err: &MeiliError) -> bool {
    matches!(err, MeiliError::Meilisearch(err) if is_index_not_found_code(err))
}

fn is_missing_index(err: &SearchError) -> bool {
    match err {
        SearchError::Meilisearch(err) => is_index_not_found(err),
        SearchError::TaskFailed(err) => is_index_not_found_code(err),
        SearchError::InvalidDocument(_) => false,
    }
}

fn is_index_not_found_code(err: &MeilisearchError) -> bool {
    matches!(err.error_code, ErrorCode::IndexNotFound)
}
