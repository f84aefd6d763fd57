/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod criteria;
pub mod database;
pub mod input;
pub mod mirror;
pub mod patch;
pub mod resource;
pub mod resources;
pub mod types;

use anyhow::{Context, Result};
use database::{connect_db, connect_index, reindex_all};
use std::sync::Arc;
use tracing::info;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    info!("Starting Suivi Server on {}:{}", cli.ip, cli.port);

    let db = connect_db(&cli).await?;
    let index = connect_index(&cli)?;

    if cli.reindex {
        let indexed = reindex_all(&db, index.as_ref())
            .await
            .context("Failed to rebuild search index")?;
        info!(indexed, "Search index rebuilt");
    }

    Ok(Arc::new(ServerState { db, index, cli }))
}
