/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_table_annee;
mod m20240301_000002_create_table_direction_regionale;
mod m20240301_000003_create_table_centre_regroupement;
mod m20240301_000004_create_table_centre;
mod m20240301_000005_create_table_nature_ouvrage;
mod m20240301_000006_create_table_type_habitation;
mod m20240301_000007_create_table_source_approv_ep;
mod m20240301_000008_create_table_mode_evacuation_eau_usee;
mod m20240301_000009_create_table_mode_evac_excreta;
mod m20240301_000010_create_table_macon;
mod m20240301_000011_create_table_prefabricant;
mod m20240301_000012_create_table_prevision;
mod m20240301_000013_create_table_fiche_suivi_ouvrage;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_table_annee::Migration),
            Box::new(m20240301_000002_create_table_direction_regionale::Migration),
            Box::new(m20240301_000003_create_table_centre_regroupement::Migration),
            Box::new(m20240301_000004_create_table_centre::Migration),
            Box::new(m20240301_000005_create_table_nature_ouvrage::Migration),
            Box::new(m20240301_000006_create_table_type_habitation::Migration),
            Box::new(m20240301_000007_create_table_source_approv_ep::Migration),
            Box::new(m20240301_000008_create_table_mode_evacuation_eau_usee::Migration),
            Box::new(m20240301_000009_create_table_mode_evac_excreta::Migration),
            Box::new(m20240301_000010_create_table_macon::Migration),
            Box::new(m20240301_000011_create_table_prefabricant::Migration),
            Box::new(m20240301_000012_create_table_prevision::Migration),
            Box::new(m20240301_000013_create_table_fiche_suivi_ouvrage::Migration),
        ]
    }
}
