/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Yearly construction forecast of a centre.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "prevision")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nb_latrines: i32,
    pub nb_puisards: i32,
    pub nb_public: i32,
    pub nb_scolaire: i32,
    pub centre_id: Option<i64>,
    pub annee_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::centre::Entity",
        from = "Column::CentreId",
        to = "super::centre::Column::Id",
        on_delete = "SetNull"
    )]
    Centre,
    #[sea_orm(
        belongs_to = "super::annee::Entity",
        from = "Column::AnneeId",
        to = "super::annee::Column::Id",
        on_delete = "SetNull"
    )]
    Annee,
}

impl Related<super::centre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Centre.def()
    }
}

impl Related<super::annee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Annee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
