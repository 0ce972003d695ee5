// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

//! Axum extractor for authenticated users.
//!
//! Use the `Auth` extractor in handlers to require a valid bearer token:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user): Auth) -> impl IntoResponse {
//!     // user is AuthenticatedUser
//! }
//! ```
//!
//! Role checks stay out of the extractor: each handler calls
//! [`crate::auth::policy::authorize`] with its own required-role set, so the
//! allowed roles for an operation are visible at the operation itself.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::claims::AuthenticatedUser;
use super::error::AuthError;
use crate::state::AppState;

/// Extractor for authenticated users.
///
/// Pulls the `Authorization: Bearer <token>` header, verifies the token
/// signature and expiry against the process-wide secret, and yields the
/// [`AuthenticatedUser`] the token was issued to.
///
/// # Example
///
/// ```rust,ignore
/// async fn read_data(Auth(user): Auth) -> Json<DataResponse> {
///     // user.username and user.role come from the verified claims
/// }
/// ```
pub struct Auth(pub AuthenticatedUser);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidAuthHeader)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidAuthHeader)?;

        let user = state.tokens.verify(token)?;

        Ok(Auth(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::directory::UserDirectory;
    use crate::auth::roles::Role;
    use crate::auth::tokens::TokenService;
    use axum::http::Request;
    use jsonwebtoken::Algorithm;
    use std::time::Duration;

    fn test_state() -> AppState {
        let directory = UserDirectory::from_records(vec![]).unwrap();
        let tokens = TokenService::new("extractor-secret", Algorithm::HS256, Duration::from_secs(1800));
        AppState::new(directory, tokens)
    }

    fn parts_with_header(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/test");
        if let Some(value) = value {
            builder = builder.header("Authorization", value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let state = test_state();
        let mut parts = parts_with_header(None);

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingAuthHeader)));
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_rejected() {
        let state = test_state();
        let mut parts = parts_with_header(Some("Basic YWxpY2U6cHc="));

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[tokio::test]
    async fn valid_token_yields_user() {
        let state = test_state();
        let token = state.tokens.issue("alice", Role::Viewer).unwrap();
        let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

        let Auth(user) = Auth::from_request_parts(&mut parts, &state).await.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, Role::Viewer);
    }

    #[tokio::test]
    async fn garbage_token_is_malformed() {
        let state = test_state();
        let mut parts = parts_with_header(Some("Bearer ey.not.real"));

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MalformedToken)));
    }
}
