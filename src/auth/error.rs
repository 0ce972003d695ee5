// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

//! Authentication and authorization errors.
//!
//! The variants keep the internal distinctions (malformed vs. bad signature
//! vs. expired) for diagnostics, but every unauthenticated outcome renders to
//! the same external body. A caller probing the API learns only two things:
//! "you are not authenticated" (401) or "you may not do this" (403).

use axum::{
    http::{header::WWW_AUTHENTICATE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Fixed external message for every token-verification failure.
const UNAUTHENTICATED_MESSAGE: &str = "Could not validate credentials";

/// Fixed external message for a failed login, identical for unknown
/// username and wrong password.
const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect username or password";

/// Fixed external message for a role check failure.
const FORBIDDEN_MESSAGE: &str = "Not enough privileges to perform this action";

/// Authentication error type.
///
/// `Display` is the internal/diagnostic rendering; the external response body
/// is produced by [`AuthError::public_message`] and deliberately collapses
/// variants.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Bad username or password at login
    InvalidCredentials,
    /// No authorization header present
    MissingAuthHeader,
    /// Authorization header present but not `Bearer <token>`
    InvalidAuthHeader,
    /// Token is not a parseable three-segment JWT or claims are missing
    MalformedToken,
    /// Token signature does not match header+payload under the secret
    InvalidSignature,
    /// Token has expired
    TokenExpired,
    /// Valid identity, but the role is not in the operation's required set
    InsufficientRole,
    /// Token could not be signed (unreachable for HMAC keys in practice)
    TokenCreation,
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
}

impl AuthError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials
            | AuthError::MissingAuthHeader
            | AuthError::InvalidAuthHeader
            | AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::TokenExpired => StatusCode::UNAUTHORIZED,
            AuthError::InsufficientRole => StatusCode::FORBIDDEN,
            AuthError::TokenCreation => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Externally visible message.
    ///
    /// All token-verification failures map to one string so the response
    /// never reveals whether a forged token failed on structure, signature
    /// or expiry.
    pub fn public_message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE,
            AuthError::MissingAuthHeader
            | AuthError::InvalidAuthHeader
            | AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::TokenExpired => UNAUTHENTICATED_MESSAGE,
            AuthError::InsufficientRole => FORBIDDEN_MESSAGE,
            AuthError::TokenCreation => "Internal server error",
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "invalid username or password"),
            AuthError::MissingAuthHeader => write!(f, "authorization header is required"),
            AuthError::InvalidAuthHeader => {
                write!(f, "invalid authorization header format (expected 'Bearer <token>')")
            }
            AuthError::MalformedToken => write!(f, "token is malformed"),
            AuthError::InvalidSignature => write!(f, "token signature is invalid"),
            AuthError::TokenExpired => write!(f, "token has expired"),
            AuthError::InsufficientRole => {
                write!(f, "role is not in the required set for this operation")
            }
            AuthError::TokenCreation => write!(f, "failed to sign access token"),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal distinction is log-only; the body below is normalized.
        tracing::debug!(error = %self, status = %status, "auth rejection");

        let body = Json(AuthErrorBody {
            error: self.public_message().to_string(),
        });
        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
