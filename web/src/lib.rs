/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoints;
pub mod error;

use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_TYPE, LOCATION};
use axum::http::Method;
use axum::routing::get;
use endpoints::entities::*;
use endpoints::search::get_search;
use endpoints::{ALERT_HEADER, PARAMS_HEADER, TOTAL_COUNT_HEADER};
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, IntoActiveModel};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use suivi_core::resource::Resource;
use suivi_core::types::*;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Routes of one entity below `/api/<path>` and `/api/_search/<path>`.
pub fn resource_routes<R>() -> Router<Arc<ServerState>>
where
    R: Resource,
    R::Model: Serialize + DeserializeOwned + IntoActiveModel<R::ActiveModel> + Send + Sync,
    R::ActiveModel: ActiveModelTrait<Entity = R> + ActiveModelBehavior + Send,
{
    let base = format!("/api/{}", R::PATH);

    Router::new()
        .route(&base, get(get_entities::<R>).post(post_entities::<R>))
        .route(&format!("{base}/count"), get(get_count::<R>))
        .route(
            &format!("{base}/{{id}}"),
            get(get_entity::<R>)
                .put(put_entity::<R>)
                .patch(patch_entity::<R>)
                .delete(delete_entity::<R>),
        )
        .route(&format!("/api/_search/{}", R::PATH), get(get_search::<R>))
}

pub fn create_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .expose_headers([LOCATION, TOTAL_COUNT_HEADER, ALERT_HEADER, PARAMS_HEADER]);

    Router::new()
        .merge(resource_routes::<EAnnee>())
        .merge(resource_routes::<EDirectionRegionale>())
        .merge(resource_routes::<ECentreRegroupement>())
        .merge(resource_routes::<ECentre>())
        .merge(resource_routes::<ENatureOuvrage>())
        .merge(resource_routes::<ETypeHabitation>())
        .merge(resource_routes::<ESourceApprovEp>())
        .merge(resource_routes::<EModeEvacuationEauUsee>())
        .merge(resource_routes::<EModeEvacExcreta>())
        .merge(resource_routes::<EMacon>())
        .merge(resource_routes::<EPrefabricant>())
        .merge(resource_routes::<EPrevision>())
        .merge(resource_routes::<EFicheSuiviOuvrage>())
        .route("/api/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);
    axum::serve(listener, app).await
}
