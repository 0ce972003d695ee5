// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

//! User roles for authorization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User roles for authorization.
///
/// The role set is closed and flat: there is no inheritance between roles.
/// What a role may do is decided purely by the required-role set each
/// protected operation declares (see [`crate::auth::policy`]).
///
/// - `Admin` - may read, create and delete data
/// - `Moderator` - may read and create data
/// - `Viewer` - may only read data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access
    Admin,
    /// Can read and create data
    Moderator,
    /// Read-only access
    Viewer,
}

impl Role {
    /// Parse role from string (case-insensitive).
    ///
    /// Used when loading the user directory file; token claims deserialize
    /// directly through serde.
    pub fn parse(s: &str) -> Option<Role> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "moderator" => Some(Role::Moderator),
            "viewer" => Some(Role::Viewer),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Moderator => write!(f, "moderator"),
            Role::Viewer => write!(f, "viewer"),
        }
    }
}
