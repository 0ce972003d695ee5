// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

//! Token issuance endpoint.

use axum::{extract::State, Form, Json};

use crate::auth::{service, AuthError};
use crate::models::{LoginForm, TokenResponse};
use crate::state::AppState;

/// Exchange form credentials for a signed access token.
///
/// Failure is always 401 with the same body whether the username was unknown
/// or the password was wrong.
#[utoipa::path(
    post,
    path = "/token",
    tag = "Auth",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Access token issued", body = TokenResponse),
        (status = 401, description = "Incorrect username or password"),
    )
)]
pub async fn login_for_access_token(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, AuthError> {
    let token = service::authenticate(&state.directory, &state.tokens, &form.username, &form.password)?;
    Ok(Json(TokenResponse::bearer(token)))
}
