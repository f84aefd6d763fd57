/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::MAX_PAGE_SIZE;
use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use search::SharedIndex;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "Suivi", display_name = "Suivi", bin_name = "suivi-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "SUIVI_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "SUIVI_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "SUIVI_PORT", value_parser = port_in_range, default_value_t = 8080)]
    pub port: u16,
    #[arg(long, env = "SUIVI_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "SUIVI_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "SUIVI_MEILI_URL")]
    pub meili_url: Option<String>,
    #[arg(long, env = "SUIVI_MEILI_KEY_FILE")]
    pub meili_key_file: Option<String>,
    #[arg(long, env = "SUIVI_MAX_PAGE_SIZE", value_parser = greater_than_zero::<u64>, default_value_t = MAX_PAGE_SIZE)]
    pub max_page_size: u64,
    #[arg(long, env = "SUIVI_REINDEX", default_value = "false")]
    pub reindex: bool,
    #[arg(long, env = "SUIVI_REPORT_ERRORS", default_value = "false")]
    pub report_errors: bool,
    #[arg(long, env = "SUIVI_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
}

pub struct ServerState {
    pub db: DatabaseConnection,
    pub index: SharedIndex,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EAnnee = annee::Entity;
pub type ECentre = centre::Entity;
pub type ECentreRegroupement = centre_regroupement::Entity;
pub type EDirectionRegionale = direction_regionale::Entity;
pub type EFicheSuiviOuvrage = fiche_suivi_ouvrage::Entity;
pub type EMacon = macon::Entity;
pub type EModeEvacExcreta = mode_evac_excreta::Entity;
pub type EModeEvacuationEauUsee = mode_evacuation_eau_usee::Entity;
pub type ENatureOuvrage = nature_ouvrage::Entity;
pub type EPrefabricant = prefabricant::Entity;
pub type EPrevision = prevision::Entity;
pub type ESourceApprovEp = source_approv_ep::Entity;
pub type ETypeHabitation = type_habitation::Entity;

pub type MAnnee = annee::Model;
pub type MCentre = centre::Model;
pub type MCentreRegroupement = centre_regroupement::Model;
pub type MDirectionRegionale = direction_regionale::Model;
pub type MFicheSuiviOuvrage = fiche_suivi_ouvrage::Model;
pub type MMacon = macon::Model;
pub type MModeEvacExcreta = mode_evac_excreta::Model;
pub type MModeEvacuationEauUsee = mode_evacuation_eau_usee::Model;
pub type MNatureOuvrage = nature_ouvrage::Model;
pub type MPrefabricant = prefabricant::Model;
pub type MPrevision = prevision::Model;
pub type MSourceApprovEp = source_approv_ep::Model;
pub type MTypeHabitation = type_habitation::Model;

pub type AAnnee = annee::ActiveModel;
pub type ACentre = centre::ActiveModel;
pub type ACentreRegroupement = centre_regroupement::ActiveModel;
pub type ADirectionRegionale = direction_regionale::ActiveModel;
pub type AFicheSuiviOuvrage = fiche_suivi_ouvrage::ActiveModel;
pub type AMacon = macon::ActiveModel;
pub type AModeEvacExcreta = mode_evac_excreta::ActiveModel;
pub type AModeEvacuationEauUsee = mode_evacuation_eau_usee::ActiveModel;
pub type ANatureOuvrage = nature_ouvrage::ActiveModel;
pub type APrefabricant = prefabricant::ActiveModel;
pub type APrevision = prevision::ActiveModel;
pub type ASourceApprovEp = source_approv_ep::ActiveModel;
pub type ATypeHabitation = type_habitation::ActiveModel;

pub type CAnnee = annee::Column;
pub type CCentre = centre::Column;
pub type CCentreRegroupement = centre_regroupement::Column;
pub type CDirectionRegionale = direction_regionale::Column;
pub type CFicheSuiviOuvrage = fiche_suivi_ouvrage::Column;
pub type CMacon = macon::Column;
pub type CModeEvacExcreta = mode_evac_excreta::Column;
pub type CModeEvacuationEauUsee = mode_evacuation_eau_usee::Column;
pub type CNatureOuvrage = nature_ouvrage::Column;
pub type CPrefabricant = prefabricant::Column;
pub type CPrevision = prevision::Column;
pub type CSourceApprovEp = source_approv_ep::Column;
pub type CTypeHabitation = type_habitation::Column;
