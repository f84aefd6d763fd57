/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use mockall::mock;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use search::{SearchError, SearchIndex, SearchPage, SharedIndex};
use serde_json::Value;
use std::sync::Arc;
use suivi_core::database::connect_db;
use suivi_core::types::*;
use web::create_router;

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

pub async fn create_test_state(index: SharedIndex) -> Arc<ServerState> {
    let cli = create_mock_cli();
    let db = connect_db(&cli).await.unwrap();

    Arc::new(ServerState { db, index, cli })
}

pub fn create_test_server(state: Arc<ServerState>) -> TestServer {
    TestServer::new(create_router(state)).unwrap()
}

pub async fn insert_centre(db: &DatabaseConnection, libelle: &str) -> MCentre {
    ACentre {
        libelle: Set(libelle.to_string()),
        responsable: Set("Moussa Diop".to_string()),
        numero_telephone: Set("338001122".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub struct References {
    pub nature_ouvrage: i64,
    pub type_habitation: i64,
    pub source_approv_ep: i64,
    pub mode_evacuation_eau_usee: i64,
    pub mode_evac_excreta: i64,
    pub macon: i64,
}

/// Lookup rows a follow-up sheet can point at, inserted without going
/// through the mirror.
pub async fn insert_references(db: &DatabaseConnection) -> References {
    let nature_ouvrage = ANatureOuvrage {
        libelle: Set("Latrine VIP".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let type_habitation = ATypeHabitation {
        libelle: Set("Concession".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let source_approv_ep = ASourceApprovEp {
        libelle: Set("Forage".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let mode_evacuation_eau_usee = AModeEvacuationEauUsee {
        libelle: Set("Puisard".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let mode_evac_excreta = AModeEvacExcreta {
        libelle: Set("Fosse septique".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let macon = AMacon {
        prenom: Set("Ibrahima".to_string()),
        nom: Set("Fall".to_string()),
        telephone: Set("776543210".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    References {
        nature_ouvrage: nature_ouvrage.id,
        type_habitation: type_habitation.id,
        source_approv_ep: source_approv_ep.id,
        mode_evacuation_eau_usee: mode_evacuation_eau_usee.id,
        mode_evac_excreta: mode_evac_excreta.id,
        macon: macon.id,
    }
}
