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
                    .table(Prevision::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Prevision::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Prevision::NbLatrines).integer().not_null())
                    .col(ColumnDef::new(Prevision::NbPuisards).integer().not_null())
                    .col(ColumnDef::new(Prevision::NbPublic).integer().not_null())
                    .col(ColumnDef::new(Prevision::NbScolaire).integer().not_null())
                    .col(ColumnDef::new(Prevision::CentreId).big_integer())
                    .col(ColumnDef::new(Prevision::AnneeId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-prevision-centre_id")
                            .from(Prevision::Table, Prevision::CentreId)
                            .to(Centre::Table, Centre::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-prevision-annee_id")
                            .from(Prevision::Table, Prevision::AnneeId)
                            .to(Annee::Table, Annee::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Prevision::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Prevision {
    Table,
    Id,
    NbLatrines,
    NbPuisards,
    NbPublic,
    NbScolaire,
    CentreId,
    AnneeId,
}

#[derive(DeriveIden)]
enum Centre {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Annee {
    Table,
    Id,
}
