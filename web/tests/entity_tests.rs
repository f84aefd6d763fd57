/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, TimeZone, Utc};
use common::*;
use serde_json::{Value, json};
use std::sync::Arc;

#[tokio::test]
async fn test_create_fiche_suivi_ouvrage() {
    let mut index = MockIndex::new();
    index
        .expect_upsert()
        .withf(|index, _, document| {
            index.to_string() == "ficheSuiviOuvrage" && document["nomBeneficiaire"] == "Ndiaye"
        })
        .times(1)
        .returning(|_, _, _| Ok(()));
    index.expect_delete().never();

    let state = create_test_state(Arc::new(index)).await;
    let refs = insert_references(&state.db).await;
    let server = create_test_server(Arc::clone(&state));

    let body = json!({
        "prenomBeneficiaire": "Awa",
        "nomBeneficiaire": "Ndiaye",
        "telephone": "771234567",
        "adresse": "Pikine Icotaf",
        "longitude": -17.39,
        "latitude": 14.75,
        "dateRemiseDevis": "2024-02-15T00:00:00Z",
        "dateDebutTravaux": "2024-03-01T08:30:00Z",
        "coutMenage": 25000,
        "subvOnas": 75000,
        "nbUsagers": 8,
        "natureOuvrageId": refs.nature_ouvrage,
        "typeHabitationId": refs.type_habitation,
        "sourceApprovEpId": refs.source_approv_ep,
        "modeEvacuationEauUseeId": refs.mode_evacuation_eau_usee,
        "modeEvacExcretaId": refs.mode_evac_excreta,
        "maconId": refs.macon,
    });

    let response = server.post("/api/fiche-suivi-ouvrages").json(&body).await;
    response.assert_status(StatusCode::CREATED);

    let created: Value = response.json();
    assert_eq!(created["error"], false);
    let id = created["message"]["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(
        response.header("location"),
        format!("/api/fiche-suivi-ouvrages/{id}").as_str()
    );
    assert_eq!(
        response.header("x-suivi-alert"),
        "suivi.ficheSuiviOuvrage.created"
    );

    let response = server
        .get(&format!("/api/fiche-suivi-ouvrages/{id}"))
        .await;
    response.assert_status_ok();

    let fetched: Value = response.json();
    for (key, value) in body.as_object().unwrap() {
        assert_eq!(&fetched["message"][key], value, "field {key}");
    }
    assert_eq!(fetched["message"]["prefabricantId"], Value::Null);

    let debut: DateTime<Utc> =
        serde_json::from_value(fetched["message"]["dateDebutTravaux"].clone()).unwrap();
    assert_eq!(debut, Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap());
}

#[tokio::test]
async fn test_put_centre_with_mismatched_id() {
    let mut index = MockIndex::new();
    index.expect_upsert().never();

    let state = create_test_state(Arc::new(index)).await;
    let centre = insert_centre(&state.db, "Centre de Rufisque").await;
    let server = create_test_server(Arc::clone(&state));

    let body = json!({
        "id": centre.id + 1,
        "libelle": "Centre de Bargny",
        "responsable": "Fatou Sarr",
        "numeroTelephone": "338000000",
    });

    let response = server
        .put(&format!("/api/centres/{}", centre.id))
        .json(&body)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let error: Value = response.json();
    assert_eq!(error["error"], true);

    let response = server
        .get(&format!("/api/centres/{}", centre.id))
        .await;
    let fetched: Value = response.json();
    assert_eq!(fetched["message"]["libelle"], "Centre de Rufisque");
}

#[tokio::test]
async fn test_put_centre_identity_rules() {
    let mut index = MockIndex::new();
    index.expect_upsert().never();

    let state = create_test_state(Arc::new(index)).await;
    let centre = insert_centre(&state.db, "Centre de Rufisque").await;
    let server = create_test_server(Arc::clone(&state));

    let without_id = json!({
        "libelle": "Centre de Bargny",
        "responsable": "Fatou Sarr",
        "numeroTelephone": "338000000",
    });
    server
        .put(&format!("/api/centres/{}", centre.id))
        .json(&without_id)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let unknown = json!({
        "id": 999,
        "libelle": "Centre de Bargny",
        "responsable": "Fatou Sarr",
        "numeroTelephone": "338000000",
    });
    server
        .put("/api/centres/999")
        .json(&unknown)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .put("/api/centres")
        .json(&unknown)
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    server
        .patch("/api/centres")
        .json(&unknown)
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_delete_centre() {
    let mut index = MockIndex::new();
    index
        .expect_delete()
        .withf(|index, _| index.to_string() == "centre")
        .times(1)
        .returning(|_, _| Ok(()));
    index.expect_upsert().never();

    let state = create_test_state(Arc::new(index)).await;
    let centre = insert_centre(&state.db, "Centre de Thiaroye").await;
    let server = create_test_server(Arc::clone(&state));

    server
        .get(&format!("/api/centres/{}", centre.id))
        .await
        .assert_status_ok();

    let response = server.delete(&format!("/api/centres/{}", centre.id)).await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(response.header("x-suivi-alert"), "suivi.centre.deleted");
    assert_eq!(response.header("x-suivi-params"), centre.id.to_string().as_str());

    server
        .get(&format!("/api/centres/{}", centre.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rejected_creates_do_not_reach_index() {
    let mut index = MockIndex::new();
    index.expect_upsert().never();

    let state = create_test_state(Arc::new(index)).await;
    let server = create_test_server(Arc::clone(&state));

    server
        .post("/api/centres")
        .json(&json!({
            "id": 3,
            "libelle": "Centre de Pikine",
            "responsable": "Fatou Sarr",
            "numeroTelephone": "338000000",
        }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post("/api/centres")
        .json(&json!({
            "libelle": "Centre de Pikine",
            "responsable": null,
            "numeroTelephone": "338000000",
        }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post("/api/centres")
        .json(&json!({
            "libelle": "Centre de Pikine",
            "responsable": "Fatou Sarr",
            "numeroTelephone": "338000000",
            "centreRegroupementId": 4242,
        }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let count: Value = server.get("/api/centres/count").await.json();
    assert_eq!(count["message"], 0);
}

#[tokio::test]
async fn test_patch_centre_updates_present_fields() {
    let mut index = MockIndex::new();
    index
        .expect_upsert()
        .withf(|_, _, document| document["responsable"] == "Aminata Ba")
        .times(1)
        .returning(|_, _, _| Ok(()));

    let state = create_test_state(Arc::new(index)).await;
    let centre = insert_centre(&state.db, "Centre de Guediawaye").await;
    let server = create_test_server(Arc::clone(&state));

    let response = server
        .patch(&format!("/api/centres/{}", centre.id))
        .json(&json!({"id": centre.id, "responsable": "Aminata Ba", "libelle": null}))
        .await;
    response.assert_status_ok();

    let patched: Value = response.json();
    assert_eq!(patched["message"]["libelle"], "Centre de Guediawaye");
    assert_eq!(patched["message"]["responsable"], "Aminata Ba");
    assert_eq!(patched["message"]["numeroTelephone"], "338001122");
}

#[tokio::test]
async fn test_patch_centre_accepts_merge_patch_json() {
    let mut index = MockIndex::new();
    index.expect_upsert().times(1).returning(|_, _, _| Ok(()));

    let state = create_test_state(Arc::new(index)).await;
    let centre = insert_centre(&state.db, "Centre de Rufisque").await;
    let server = create_test_server(Arc::clone(&state));

    let response = server
        .patch(&format!("/api/centres/{}", centre.id))
        .json(&json!({"id": centre.id, "numeroTelephone": "338009900"}))
        .content_type("application/merge-patch+json")
        .await;
    response.assert_status_ok();

    let patched: Value = response.json();
    assert_eq!(patched["message"]["libelle"], "Centre de Rufisque");
    assert_eq!(patched["message"]["numeroTelephone"], "338009900");
}

#[tokio::test]
async fn test_failing_mirror_does_not_fail_write() {
    let mut index = MockIndex::new();
    index
        .expect_upsert()
        .times(1)
        .returning(|_, _, _| Err(search::SearchError::InvalidDocument(1)));

    let state = create_test_state(Arc::new(index)).await;
    let server = create_test_server(Arc::clone(&state));

    server
        .post("/api/annees")
        .json(&json!({"libelle": "2024"}))
        .await
        .assert_status(StatusCode::CREATED);

    let count: Value = server.get("/api/annees/count").await.json();
    assert_eq!(count["message"], 1);
}
