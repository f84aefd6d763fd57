/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CentreRegroupement::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CentreRegroupement::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CentreRegroupement::Libelle).string().not_null())
                    .col(ColumnDef::new(CentreRegroupement::Responsable).string().not_null())
                    .col(ColumnDef::new(CentreRegroupement::NumeroTelephone).string().not_null())
                    .col(ColumnDef::new(CentreRegroupement::DirectionRegionaleId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-centre_regroupement-direction_regionale_id")
                            .from(CentreRegroupement::Table, CentreRegroupement::DirectionRegionaleId)
                            .to(DirectionRegionale::Table, DirectionRegionale::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CentreRegroupement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CentreRegroupement {
    Table,
    Id,
    Libelle,
    Responsable,
    NumeroTelephone,
    DirectionRegionaleId,
}

#[derive(DeriveIden)]
enum DirectionRegionale {
    Table,
    Id,
}
