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
                    .table(FicheSuiviOuvrage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FicheSuiviOuvrage::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FicheSuiviOuvrage::PrenomBeneficiaire).string().not_null())
                    .col(ColumnDef::new(FicheSuiviOuvrage::NomBeneficiaire).string().not_null())
                    .col(ColumnDef::new(FicheSuiviOuvrage::Telephone).string().not_null())
                    .col(ColumnDef::new(FicheSuiviOuvrage::Adresse).string())
                    .col(ColumnDef::new(FicheSuiviOuvrage::Longitude).double())
                    .col(ColumnDef::new(FicheSuiviOuvrage::Latitude).double())
                    .col(
                        ColumnDef::new(FicheSuiviOuvrage::DateRemiseDevis)
                            .timestamp_with_time_zone()
                    )
                    .col(
                        ColumnDef::new(FicheSuiviOuvrage::DateDebutTravaux)
                            .timestamp_with_time_zone()
                    )
                    .col(
                        ColumnDef::new(FicheSuiviOuvrage::DateFinTravaux)
                            .timestamp_with_time_zone()
                    )
                    .col(ColumnDef::new(FicheSuiviOuvrage::CoutMenage).integer())
                    .col(ColumnDef::new(FicheSuiviOuvrage::SubvOnas).integer())
                    .col(ColumnDef::new(FicheSuiviOuvrage::NbUsagers).integer())
                    .col(ColumnDef::new(FicheSuiviOuvrage::NatureOuvrageId).big_integer())
                    .col(ColumnDef::new(FicheSuiviOuvrage::TypeHabitationId).big_integer())
                    .col(ColumnDef::new(FicheSuiviOuvrage::SourceApprovEpId).big_integer())
                    .col(ColumnDef::new(FicheSuiviOuvrage::ModeEvacuationEauUseeId).big_integer())
                    .col(ColumnDef::new(FicheSuiviOuvrage::ModeEvacExcretaId).big_integer())
                    .col(ColumnDef::new(FicheSuiviOuvrage::MaconId).big_integer())
                    .col(ColumnDef::new(FicheSuiviOuvrage::PrefabricantId).big_integer())
                    .col(ColumnDef::new(FicheSuiviOuvrage::PrevisionId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-fiche_suivi_ouvrage-nature_ouvrage_id")
                            .from(FicheSuiviOuvrage::Table, FicheSuiviOuvrage::NatureOuvrageId)
                            .to(NatureOuvrage::Table, NatureOuvrage::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-fiche_suivi_ouvrage-type_habitation_id")
                            .from(FicheSuiviOuvrage::Table, FicheSuiviOuvrage::TypeHabitationId)
                            .to(TypeHabitation::Table, TypeHabitation::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-fiche_suivi_ouvrage-source_approv_ep_id")
                            .from(FicheSuiviOuvrage::Table, FicheSuiviOuvrage::SourceApprovEpId)
                            .to(SourceApprovEp::Table, SourceApprovEp::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-fiche_suivi_ouvrage-mode_evacuation_eau_usee_id")
                            .from(FicheSuiviOuvrage::Table, FicheSuiviOuvrage::ModeEvacuationEauUseeId)
                            .to(ModeEvacuationEauUsee::Table, ModeEvacuationEauUsee::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-fiche_suivi_ouvrage-mode_evac_excreta_id")
                            .from(FicheSuiviOuvrage::Table, FicheSuiviOuvrage::ModeEvacExcretaId)
                            .to(ModeEvacExcreta::Table, ModeEvacExcreta::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-fiche_suivi_ouvrage-macon_id")
                            .from(FicheSuiviOuvrage::Table, FicheSuiviOuvrage::MaconId)
                            .to(Macon::Table, Macon::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-fiche_suivi_ouvrage-prefabricant_id")
                            .from(FicheSuiviOuvrage::Table, FicheSuiviOuvrage::PrefabricantId)
                            .to(Prefabricant::Table, Prefabricant::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-fiche_suivi_ouvrage-prevision_id")
                            .from(FicheSuiviOuvrage::Table, FicheSuiviOuvrage::PrevisionId)
                            .to(Prevision::Table, Prevision::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FicheSuiviOuvrage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FicheSuiviOuvrage {
    Table,
    Id,
    PrenomBeneficiaire,
    NomBeneficiaire,
    Telephone,
    Adresse,
    Longitude,
    Latitude,
    DateRemiseDevis,
    DateDebutTravaux,
    DateFinTravaux,
    CoutMenage,
    SubvOnas,
    NbUsagers,
    NatureOuvrageId,
    TypeHabitationId,
    SourceApprovEpId,
    ModeEvacuationEauUseeId,
    ModeEvacExcretaId,
    MaconId,
    PrefabricantId,
    PrevisionId,
}

#[derive(DeriveIden)]
enum NatureOuvrage {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum TypeHabitation {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum SourceApprovEp {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ModeEvacuationEauUsee {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ModeEvacExcreta {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Macon {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Prefabricant {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Prevision {
    Table,
    Id,
}
