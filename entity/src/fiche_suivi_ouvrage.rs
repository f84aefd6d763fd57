/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Follow-up sheet of one sanitation structure built for a household.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "fiche_suivi_ouvrage")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub prenom_beneficiaire: String,
    pub nom_beneficiaire: String,
    pub telephone: String,
    pub adresse: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub date_remise_devis: Option<DateTimeUtc>,
    pub date_debut_travaux: Option<DateTimeUtc>,
    pub date_fin_travaux: Option<DateTimeUtc>,
    pub cout_menage: Option<i32>,
    pub subv_onas: Option<i32>,
    pub nb_usagers: Option<i32>,
    pub nature_ouvrage_id: Option<i64>,
    pub type_habitation_id: Option<i64>,
    pub source_approv_ep_id: Option<i64>,
    pub mode_evacuation_eau_usee_id: Option<i64>,
    pub mode_evac_excreta_id: Option<i64>,
    pub macon_id: Option<i64>,
    pub prefabricant_id: Option<i64>,
    pub prevision_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::nature_ouvrage::Entity",
        from = "Column::NatureOuvrageId",
        to = "super::nature_ouvrage::Column::Id",
        on_delete = "SetNull"
    )]
    NatureOuvrage,
    #[sea_orm(
        belongs_to = "super::type_habitation::Entity",
        from = "Column::TypeHabitationId",
        to = "super::type_habitation::Column::Id",
        on_delete = "SetNull"
    )]
    TypeHabitation,
    #[sea_orm(
        belongs_to = "super::source_approv_ep::Entity",
        from = "Column::SourceApprovEpId",
        to = "super::source_approv_ep::Column::Id",
        on_delete = "SetNull"
    )]
    SourceApprovEp,
    #[sea_orm(
        belongs_to = "super::mode_evacuation_eau_usee::Entity",
        from = "Column::ModeEvacuationEauUseeId",
        to = "super::mode_evacuation_eau_usee::Column::Id",
        on_delete = "SetNull"
    )]
    ModeEvacuationEauUsee,
    #[sea_orm(
        belongs_to = "super::mode_evac_excreta::Entity",
        from = "Column::ModeEvacExcretaId",
        to = "super::mode_evac_excreta::Column::Id",
        on_delete = "SetNull"
    )]
    ModeEvacExcreta,
    #[sea_orm(
        belongs_to = "super::macon::Entity",
        from = "Column::MaconId",
        to = "super::macon::Column::Id",
        on_delete = "SetNull"
    )]
    Macon,
    #[sea_orm(
        belongs_to = "super::prefabricant::Entity",
        from = "Column::PrefabricantId",
        to = "super::prefabricant::Column::Id",
        on_delete = "SetNull"
    )]
    Prefabricant,
    #[sea_orm(
        belongs_to = "super::prevision::Entity",
        from = "Column::PrevisionId",
        to = "super::prevision::Column::Id",
        on_delete = "SetNull"
    )]
    Prevision,
}

impl Related<super::nature_ouvrage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NatureOuvrage.def()
    }
}

impl Related<super::type_habitation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TypeHabitation.def()
    }
}

impl Related<super::source_approv_ep::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SourceApprovEp.def()
    }
}

impl Related<super::mode_evacuation_eau_usee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModeEvacuationEauUsee.def()
    }
}

impl Related<super::mode_evac_excreta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModeEvacExcreta.def()
    }
}

impl Related<super::macon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Macon.def()
    }
}

impl Related<super::prefabricant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prefabricant.def()
    }
}

impl Related<super::prevision::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prevision.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
