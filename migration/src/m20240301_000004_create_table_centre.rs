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
                    .table(Centre::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Centre::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Centre::Libelle).string().not_null())
                    .col(ColumnDef::new(Centre::Responsable).string().not_null())
                    .col(ColumnDef::new(Centre::NumeroTelephone).string().not_null())
                    .col(ColumnDef::new(Centre::CentreRegroupementId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-centre-centre_regroupement_id")
                            .from(Centre::Table, Centre::CentreRegroupementId)
                            .to(CentreRegroupement::Table, CentreRegroupement::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Centre::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Centre {
    Table,
    Id,
    Libelle,
    Responsable,
    NumeroTelephone,
    CentreRegroupementId,
}

#[derive(DeriveIden)]
enum CentreRegroupement {
    Table,
    Id,
}
