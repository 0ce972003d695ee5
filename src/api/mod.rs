// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::Role,
    models::{DataPayload, HealthCheckResponse, LoginForm, MessageResponse, TokenResponse},
    state::AppState,
};

pub mod data;
pub mod health;
pub mod token;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/data",
            get(data::read_data)
                .post(data::create_data)
                .delete(data::delete_data),
        )
        .with_state(state.clone());

    Router::new()
        .route("/token", post(token::login_for_access_token))
        .route("/health", get(health::health_check))
        .with_state(state)
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        token::login_for_access_token,
        data::read_data,
        data::create_data,
        data::delete_data,
        health::health_check
    ),
    components(
        schemas(
            LoginForm,
            TokenResponse,
            DataPayload,
            MessageResponse,
            HealthCheckResponse,
            Role
        )
    ),
    tags(
        (name = "Auth", description = "Credential login and token issuance"),
        (name = "Data", description = "Role-gated data operations"),
        (name = "Health", description = "Service health")
    )
)]
struct ApiDoc;
