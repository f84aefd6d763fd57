/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use async_trait::async_trait;
use mockall::mock;
use sea_orm::DatabaseConnection;
use search::{SearchError, SearchIndex, SearchPage};
use serde_json::Value;
use suivi_core::database::connect_db;
use suivi_core::types::*;

mock! {
    pub Index {}

    #[async_trait]
    impl SearchIndex for Index {
        async fn upsert(&self, index: &str, id: i64, document: Value) -> Result<(), SearchError>;
        async fn delete(&self, index: &str, id: i64) -> Result<(), SearchError>;
        async fn search(
            &self,
            index: &str,
            query: &str,
            offset: usize,
            limit: usize,
        ) -> Result<SearchPage, SearchError>;
        async fn clear(&self, index: &str) -> Result<(), SearchError>;
    }
}

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 8080,
        database_url: Some("sqlite::memory:".to_string()),
        database_url_file: None,
        meili_url: None,
        meili_key_file: None,
        max_page_size: 2000,
        reindex: false,
        report_errors: false,
        sentry_dsn: None,
    }
}

/// Fresh in-memory database with every migration applied.
pub async fn create_test_db() -> DatabaseConnection {
    connect_db(&create_mock_cli()).await.unwrap()
}

pub fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
