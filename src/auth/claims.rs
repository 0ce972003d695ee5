// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

//! JWT claims and authenticated user representation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::roles::Role;

/// Claims carried in an access token.
///
/// Wire format is the usual three dot-separated base64url segments; the
/// payload holds exactly these fields. `role` is signed along with the rest,
/// so the verifier trusts it without a directory re-lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject - the username the token was issued to
    pub sub: String,

    /// Role granted at issuance
    pub role: Role,

    /// Issued-at (Unix seconds)
    pub iat: i64,

    /// Expiration (Unix seconds)
    pub exp: i64,
}

/// Authenticated user extracted from a verified token.
///
/// This is the per-request principal handed to handlers. It lives only for
/// the duration of the request and carries no directory state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Username (token `sub` claim)
    pub username: String,

    /// Role the token was issued with
    pub role: Role,
}

impl From<AccessClaims> for AuthenticatedUser {
    fn from(claims: AccessClaims) -> Self {
        Self {
            username: claims.sub,
            role: claims.role,
        }
    }
}
