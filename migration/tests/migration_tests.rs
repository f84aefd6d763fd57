/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the schema migrations

use migration::{Migrator, MigratorTrait};
use sea_orm_migration::SchemaManager;
use sea_orm_migration::sea_orm::{ConnectOptions, Database, DbErr};

const TABLES: [&str; 13] = [
    "annee",
    "direction_regionale",
    "centre_regroupement",
    "centre",
    "nature_ouvrage",
    "type_habitation",
    "source_approv_ep",
    "mode_evacuation_eau_usee",
    "mode_evac_excreta",
    "macon",
    "prefabricant",
    "prevision",
    "fiche_suivi_ouvrage",
];

#[tokio::test]
async fn test_migrations_up_and_down() -> Result<(), DbErr> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    let manager = SchemaManager::new(&db);
    for table in TABLES {
        assert!(manager.has_table(table).await?, "missing table {table}");
    }
    assert!(
        manager
            .has_column("fiche_suivi_ouvrage", "mode_evacuation_eau_usee_id")
            .await?
    );

    Migrator::down(&db, None).await?;

    for table in TABLES {
        assert!(!manager.has_table(table).await?, "table {table} still present");
    }

    Ok(())
}

#[test]
fn test_migration_count() {
    assert_eq!(Migrator::migrations().len(), TABLES.len());
}
