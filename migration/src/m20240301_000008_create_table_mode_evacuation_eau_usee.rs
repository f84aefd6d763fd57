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
                    .table(ModeEvacuationEauUsee::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ModeEvacuationEauUsee::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ModeEvacuationEauUsee::Libelle).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ModeEvacuationEauUsee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ModeEvacuationEauUsee {
    Table,
    Id,
    Libelle,
}
