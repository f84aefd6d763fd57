/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "centre")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub libelle: String,
    pub responsable: String,
    pub numero_telephone: String,
    pub centre_regroupement_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::centre_regroupement::Entity",
        from = "Column::CentreRegroupementId",
        to = "super::centre_regroupement::Column::Id",
        on_delete = "SetNull"
    )]
    CentreRegroupement,
}

impl Related<super::centre_regroupement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CentreRegroupement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
