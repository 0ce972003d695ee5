// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

//! # API Data Models
//!
//! Request and response structures for the REST API. All types derive
//! `Serialize`/`Deserialize` and `ToSchema` for JSON handling and OpenAPI
//! documentation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Token Endpoint Models
// =============================================================================

/// Form-encoded credentials posted to `/token`.
#[derive(Clone, Deserialize, ToSchema)]
pub struct LoginForm {
    /// Username to authenticate as.
    pub username: String,
    /// Plaintext password. Verified against the stored bcrypt hash and
    /// never logged or persisted.
    pub password: String,
}

// Manual impl so the plaintext password can't leak through debug logging.
impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TokenResponse {
    /// The signed access token (JWT).
    pub access_token: String,
    /// Token type label, always `"bearer"`.
    pub token_type: String,
}

impl TokenResponse {
    /// Wrap an issued token with the bearer type label.
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

// =============================================================================
// Data Endpoint Models
// =============================================================================

/// Payload for creating data.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DataPayload {
    /// The message to store.
    pub message: String,
}

/// Generic message response returned by the data endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human-readable outcome of the operation.
    pub message: String,
}

// =============================================================================
// Health Check Models
// =============================================================================

/// Response model for the health check endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheckResponse {
    /// Overall status, `"OK"` when the service is up.
    pub status: String,
    /// Human-readable status message.
    pub message: String,
    /// Current server time formatted as `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
}
