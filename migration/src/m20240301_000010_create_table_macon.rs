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
                    .table(Macon::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Macon::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Macon::Prenom).string().not_null())
                    .col(ColumnDef::new(Macon::Nom).string().not_null())
                    .col(ColumnDef::new(Macon::Telephone).string().not_null())
                    .col(ColumnDef::new(Macon::CentreId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-macon-centre_id")
                            .from(Macon::Table, Macon::CentreId)
                            .to(Centre::Table, Centre::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Macon::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Macon {
    Table,
    Id,
    Prenom,
    Nom,
    Telephone,
    CentreId,
}

#[derive(DeriveIden)]
enum Centre {
    Table,
    Id,
}
