/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use suivi_core::criteria::{Criteria, ListQuery};
use suivi_core::mirror;
use suivi_core::resource::Resource;
use suivi_core::types::*;

async fn ids<R>(db: &DatabaseConnection, pairs: &[(&str, &str)]) -> Vec<i64>
where
    R: Resource,
    R::Model: Send + Sync,
{
    let query = ListQuery::<R>::parse(&params(pairs), 2000).unwrap();
    let (models, total) = mirror::list::<R>(db, &query).await.unwrap();
    let count = mirror::count::<R>(db, &query.criteria).await.unwrap();

    assert_eq!(total, count, "list and count disagree for {pairs:?}");
    models.iter().filter_map(R::id_of).collect()
}

struct Fixture {
    db: DatabaseConnection,
    annees: Vec<MAnnee>,
    centres: Vec<MCentre>,
    previsions: Vec<MPrevision>,
    fiches: Vec<MFicheSuiviOuvrage>,
}

async fn fixture() -> Fixture {
    let db = create_test_db().await;

    let mut annees = Vec::new();
    for libelle in ["2023", "2024", "2025"] {
        let annee = AAnnee {
            libelle: Set(libelle.to_string()),
            ..Default::default()
        };
        annees.push(annee.insert(&db).await.unwrap());
    }

    let mut centres = Vec::new();
    for libelle in ["Dakar", "Thies", "Saint-Louis"] {
        let centre = ACentre {
            libelle: Set(libelle.to_string()),
            responsable: Set("Diop".to_string()),
            numero_telephone: Set("338001122".to_string()),
            ..Default::default()
        };
        centres.push(centre.insert(&db).await.unwrap());
    }

    let mut previsions = Vec::new();
    for (nb_latrines, centre, annee) in [
        (5, Some(centres[0].id), Some(annees[0].id)),
        (10, Some(centres[0].id), Some(annees[1].id)),
        (5, Some(centres[1].id), Some(annees[1].id)),
        (20, None, None),
    ] {
        let prevision = APrevision {
            nb_latrines: Set(nb_latrines),
            nb_puisards: Set(1),
            nb_public: Set(0),
            nb_scolaire: Set(0),
            centre_id: Set(centre),
            annee_id: Set(annee),
            ..Default::default()
        };
        previsions.push(prevision.insert(&db).await.unwrap());
    }

    let mut fiches = Vec::new();
    for (nom, adresse, longitude, debut) in [
        ("Ndiaye", Some("Pikine Icotaf"), Some(-17.39), Some((2024, 3, 1))),
        ("Sow", Some("Guediawaye"), Some(-17.41), Some((2024, 6, 15))),
        ("Fall", None, None, None),
    ] {
        let fiche = AFicheSuiviOuvrage {
            prenom_beneficiaire: Set("Awa".to_string()),
            nom_beneficiaire: Set(nom.to_string()),
            telephone: Set("771234567".to_string()),
            adresse: Set(adresse.map(str::to_string)),
            longitude: Set(longitude),
            latitude: Set(None),
            date_remise_devis: Set(None),
            date_debut_travaux: Set(debut.map(|(y, m, d)| {
                Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
            })),
            date_fin_travaux: Set(None),
            cout_menage: Set(None),
            subv_onas: Set(None),
            nb_usagers: Set(None),
            nature_ouvrage_id: Set(None),
            type_habitation_id: Set(None),
            source_approv_ep_id: Set(None),
            mode_evacuation_eau_usee_id: Set(None),
            mode_evac_excreta_id: Set(None),
            macon_id: Set(None),
            prefabricant_id: Set(None),
            prevision_id: Set(Some(previsions[0].id)),
            ..Default::default()
        };
        fiches.push(fiche.insert(&db).await.unwrap());
    }

    Fixture {
        db,
        annees,
        centres,
        previsions,
        fiches,
    }
}

#[tokio::test]
async fn test_equals_and_in() {
    let f = fixture().await;

    let found = ids::<EPrevision>(&f.db, &[("nbLatrines.equals", "5")]).await;
    assert_eq!(found, vec![f.previsions[0].id, f.previsions[2].id]);

    let found = ids::<EPrevision>(&f.db, &[("nbLatrines.notEquals", "5")]).await;
    assert_eq!(found, vec![f.previsions[1].id, f.previsions[3].id]);

    let list = format!("{},{}", f.previsions[1].id, f.previsions[3].id);
    let found = ids::<EPrevision>(&f.db, &[("id.in", list.as_str())]).await;
    assert_eq!(found, vec![f.previsions[1].id, f.previsions[3].id]);

    let found = ids::<EPrevision>(&f.db, &[("id.notIn", list.as_str())]).await;
    assert_eq!(found, vec![f.previsions[0].id, f.previsions[2].id]);
}

#[tokio::test]
async fn test_ranges() {
    let f = fixture().await;

    let found = ids::<EPrevision>(&f.db, &[("nbLatrines.greaterThan", "5")]).await;
    assert_eq!(found, vec![f.previsions[1].id, f.previsions[3].id]);

    let found = ids::<EPrevision>(
        &f.db,
        &[
            ("nbLatrines.greaterThanOrEqual", "5"),
            ("nbLatrines.lessThan", "20"),
        ],
    )
    .await;
    assert_eq!(found.len(), 3);

    let found = ids::<EFicheSuiviOuvrage>(
        &f.db,
        &[("dateDebutTravaux.greaterThan", "2024-04-01T00:00:00Z")],
    )
    .await;
    assert_eq!(found, vec![f.fiches[1].id]);

    let found = ids::<EFicheSuiviOuvrage>(&f.db, &[("longitude.lessThanOrEqual", "-17.4")]).await;
    assert_eq!(found, vec![f.fiches[1].id]);
}

#[tokio::test]
async fn test_specified_partitions_rows() {
    let f = fixture().await;

    let with = ids::<EPrevision>(&f.db, &[("centreId.specified", "true")]).await;
    let without = ids::<EPrevision>(&f.db, &[("centreId.specified", "false")]).await;

    assert_eq!(with.len() + without.len(), f.previsions.len());
    assert_eq!(without, vec![f.previsions[3].id]);
}

#[tokio::test]
async fn test_contains_complements_does_not_contain() {
    let f = fixture().await;

    let contains = ids::<EFicheSuiviOuvrage>(&f.db, &[("adresse.contains", "PIKINE")]).await;
    let excludes = ids::<EFicheSuiviOuvrage>(&f.db, &[("adresse.doesNotContain", "PIKINE")]).await;

    assert_eq!(contains, vec![f.fiches[0].id]);
    assert_eq!(excludes, vec![f.fiches[1].id, f.fiches[2].id]);
    assert_eq!(contains.len() + excludes.len(), f.fiches.len());
}

#[tokio::test]
async fn test_contains_matches_wildcards_literally() {
    let db = create_test_db().await;

    let mut natures = Vec::new();
    for libelle in ["Rue 10", "Latrine", "Fosse_2", "Taux 100%"] {
        let nature = ANatureOuvrage {
            libelle: Set(libelle.to_string()),
            ..Default::default()
        };
        natures.push(nature.insert(&db).await.unwrap());
    }

    let underscore = ids::<ENatureOuvrage>(&db, &[("libelle.contains", "e_1")]).await;
    assert!(underscore.is_empty());

    let underscore = ids::<ENatureOuvrage>(&db, &[("libelle.contains", "_")]).await;
    assert_eq!(underscore, vec![natures[2].id]);

    let percent = ids::<ENatureOuvrage>(&db, &[("libelle.contains", "%")]).await;
    assert_eq!(percent, vec![natures[3].id]);

    let without = ids::<ENatureOuvrage>(&db, &[("libelle.doesNotContain", "%")]).await;
    assert_eq!(without, vec![natures[0].id, natures[1].id, natures[2].id]);
}

#[tokio::test]
async fn test_relation_id_filter() {
    let f = fixture().await;
    let centre = f.centres[0].id.to_string();

    let found = ids::<EPrevision>(&f.db, &[("centreId.equals", centre.as_str())]).await;
    assert_eq!(found, vec![f.previsions[0].id, f.previsions[1].id]);

    let missing = (f.centres.iter().map(|c| c.id).max().unwrap_or_default() + 1).to_string();
    let found = ids::<EPrevision>(&f.db, &[("centreId.equals", missing.as_str())]).await;
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_back_reference_filter() {
    let f = fixture().await;

    let prevision = f.previsions[2].id.to_string();
    let found = ids::<EAnnee>(&f.db, &[("previsionId.equals", prevision.as_str())]).await;
    assert_eq!(found, vec![f.annees[1].id]);

    let found = ids::<EAnnee>(&f.db, &[("previsionId.specified", "false")]).await;
    assert_eq!(found, vec![f.annees[2].id]);

    let found = ids::<ECentre>(&f.db, &[("previsionId.specified", "true")]).await;
    assert_eq!(found, vec![f.centres[0].id, f.centres[1].id]);
}

#[tokio::test]
async fn test_clauses_are_combined_with_and() {
    let f = fixture().await;

    let annee = f.annees[1].id.to_string();
    let found = ids::<EPrevision>(
        &f.db,
        &[("nbLatrines.equals", "5"), ("anneeId.equals", annee.as_str())],
    )
    .await;
    assert_eq!(found, vec![f.previsions[2].id]);
}

#[tokio::test]
async fn test_empty_criteria_counts_everything() {
    let f = fixture().await;

    let count = mirror::count::<EFicheSuiviOuvrage>(&f.db, &Criteria::default())
        .await
        .unwrap();
    assert_eq!(count, f.fiches.len() as u64);
}
