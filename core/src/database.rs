/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::load_secret;
use super::mirror::{ServiceResult, reindex};
use super::types::*;
use anyhow::{Context, Result};
use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::prelude::*;
use search::{MeiliIndex, MemoryIndex, SearchIndex, SharedIndex};
use std::sync::Arc;
use std::time::Duration;
use tracing::log::LevelFilter;
use tracing::{info, warn};

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        load_secret(file).context("Failed to read database url from file")?
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url.clone());

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    // In-memory SQLite databases exist per connection
    if db_url.starts_with("sqlite") {
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(100).min_connections(5);
    }

    opt.connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    Ok(db)
}

pub fn connect_index(cli: &Cli) -> Result<SharedIndex> {
    match &cli.meili_url {
        Some(url) => {
            let key = cli
                .meili_key_file
                .as_deref()
                .map(load_secret)
                .transpose()
                .context("Failed to read meilisearch key from file")?;

            info!(url = %url, "Mirroring entities into meilisearch");
            let index = MeiliIndex::new(url, key.as_deref())
                .context("Failed to create meilisearch client")?;
            Ok(Arc::new(index))
        }
        None => {
            warn!("No meilisearch url configured, using in-memory search index");
            Ok(Arc::new(MemoryIndex::new()))
        }
    }
}

/// Rebuilds every search index from the database.
pub async fn reindex_all(db: &DatabaseConnection, index: &dyn SearchIndex) -> ServiceResult<u64> {
    Ok(reindex::<EAnnee>(db, index).await?
        + reindex::<EDirectionRegionale>(db, index).await?
        + reindex::<ECentreRegroupement>(db, index).await?
        + reindex::<ECentre>(db, index).await?
        + reindex::<ENatureOuvrage>(db, index).await?
        + reindex::<ETypeHabitation>(db, index).await?
        + reindex::<ESourceApprovEp>(db, index).await?
        + reindex::<EModeEvacuationEauUsee>(db, index).await?
        + reindex::<EModeEvacExcreta>(db, index).await?
        + reindex::<EMacon>(db, index).await?
        + reindex::<EPrefabricant>(db, index).await?
        + reindex::<EPrevision>(db, index).await?
        + reindex::<EFicheSuiviOuvrage>(db, index).await?)
}
