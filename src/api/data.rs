// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

//! Role-gated data endpoints.
//!
//! Each handler declares its allowed-role set from [`crate::auth::policy`]
//! and checks it explicitly, so an operation's access rules are readable at
//! the operation itself.

use axum::Json;

use crate::auth::{policy, Auth, AuthError};
use crate::models::{DataPayload, MessageResponse};

/// Read the data. Allowed to every role.
#[utoipa::path(
    get,
    path = "/api/data",
    tag = "Data",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Data read", body = MessageResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Role not permitted"),
    )
)]
pub async fn read_data(Auth(user): Auth) -> Result<Json<MessageResponse>, AuthError> {
    policy::authorize(&user, policy::READ_DATA)?;

    Ok(Json(MessageResponse {
        message: format!("Hello, {}! You can view the data.", user.username),
    }))
}

/// Create new data. Allowed to admins and moderators.
#[utoipa::path(
    post,
    path = "/api/data",
    tag = "Data",
    security(("bearer" = [])),
    request_body = DataPayload,
    responses(
        (status = 200, description = "Data created", body = MessageResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Role not permitted"),
    )
)]
pub async fn create_data(
    Auth(user): Auth,
    Json(payload): Json<DataPayload>,
) -> Result<Json<MessageResponse>, AuthError> {
    policy::authorize(&user, policy::CREATE_DATA)?;

    Ok(Json(MessageResponse {
        message: format!("Data created: '{}' by {}", payload.message, user.username),
    }))
}

/// Delete the data. Allowed to admins only.
#[utoipa::path(
    delete,
    path = "/api/data",
    tag = "Data",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Data deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Role not permitted"),
    )
)]
pub async fn delete_data(Auth(user): Auth) -> Result<Json<MessageResponse>, AuthError> {
    policy::authorize(&user, policy::DELETE_DATA)?;

    Ok(Json(MessageResponse {
        message: format!("Data deleted successfully by {}.", user.username),
    }))
}
