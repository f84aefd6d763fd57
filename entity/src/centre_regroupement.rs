/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "centre_regroupement")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub libelle: String,
    pub responsable: String,
    pub numero_telephone: String,
    pub direction_regionale_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::direction_regionale::Entity",
        from = "Column::DirectionRegionaleId",
        to = "super::direction_regionale::Column::Id",
        on_delete = "SetNull"
    )]
    DirectionRegionale,
}

impl Related<super::direction_regionale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DirectionRegionale.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
