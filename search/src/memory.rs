/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Process-local index, used when no Meilisearch instance is configured.
//!
//! Query grammar: whitespace separated terms which must all match. A term
//! `field:value` matches when the scalar `field` contains `value`, a bare
//! term matches when any scalar attribute contains it. Matching ignores
//! case. An empty query or `*` matches every document.

use super::{SearchError, SearchIndex, SearchPage, with_id};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryIndex {
    indexes: RwLock<HashMap<String, BTreeMap<i64, Value>>>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held by `index`.
    pub async fn len(&self, index: &str) -> usize {
        self.indexes
            .read()
            .await
            .get(index)
            .map(|documents| documents.len())
            .unwrap_or(0)
    }

    pub async fn get(&self, index: &str, id: i64) -> Option<Value> {
        self.indexes
            .read()
            .await
            .get(index)
            .and_then(|documents| documents.get(&id).cloned())
    }
}

#[async_trait]
impl SearchIndex for MemoryIndex {
    async fn upsert(&self, index: &str, id: i64, document: Value) -> Result<(), SearchError> {
        let document = with_id(document, id)?;
        self.indexes
            .write()
            .await
            .entry(index.to_string())
            .or_default()
            .insert(id, document);
        Ok(())
    }

    async fn delete(&self, index: &str, id: i64) -> Result<(), SearchError> {
        if let Some(documents) = self.indexes.write().await.get_mut(index) {
            documents.remove(&id);
        }
        Ok(())
    }

    async fn search(
        &self,
        index: &str,
        query: &str,
        offset: usize,
        limit: usize,
    ) -> Result<SearchPage, SearchError> {
        let indexes = self.indexes.read().await;
        let Some(documents) = indexes.get(index) else {
            return Ok(SearchPage {
                hits: Vec::new(),
                total: 0,
            });
        };

        let terms = parse_query(query);
        let matched: Vec<&Value> = documents
            .values()
            .filter(|document| terms.iter().all(|term| term.matches(document)))
            .collect();

        Ok(SearchPage {
            total: matched.len(),
            hits: matched
                .into_iter()
                .skip(offset)
                .take(limit)
                .cloned()
                .collect(),
        })
    }

    async fn clear(&self, index: &str) -> Result<(), SearchError> {
        self.indexes.write().await.remove(index);
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum Term {
    Field { name: String, needle: String },
    Any(String),
}

impl Term {
    fn matches(&self, document: &Value) -> bool {
        match self {
            Term::Field { name, needle } => document
                .get(name)
                .and_then(scalar_text)
                .is_some_and(|text| text.contains(needle.as_str())),
            Term::Any(needle) => document.as_object().is_some_and(|map| {
                map.values()
                    .filter_map(scalar_text)
                    .any(|text| text.contains(needle.as_str()))
            }),
        }
    }
}

fn parse_query(query: &str) -> Vec<Term> {
    query
        .split_whitespace()
        .filter(|term| *term != "*")
        .map(|term| match term.split_once(':') {
            Some((name, needle)) if is_field_name(name) && !needle.is_empty() => Term::Field {
                name: name.to_string(),
                needle: needle.to_lowercase(),
            },
            _ => Term::Any(term.to_lowercase()),
        })
        .collect()
}

fn is_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.to_lowercase()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
