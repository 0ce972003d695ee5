// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

//! Per-operation role requirements.
//!
//! Every protected operation declares the exact set of roles allowed to
//! perform it, and the guard does plain set membership. No hierarchy: an
//! admin may delete only because `DELETE_DATA` lists `Admin`, not because
//! admin outranks anyone.

use super::claims::AuthenticatedUser;
use super::error::AuthError;
use super::roles::Role;

/// Roles allowed to read data.
pub const READ_DATA: &[Role] = &[Role::Admin, Role::Moderator, Role::Viewer];

/// Roles allowed to create data.
pub const CREATE_DATA: &[Role] = &[Role::Admin, Role::Moderator];

/// Roles allowed to delete data.
pub const DELETE_DATA: &[Role] = &[Role::Admin];

/// Check whether `role` is a member of the required set.
///
/// Pure and deterministic; safe to call repeatedly and concurrently.
pub fn permitted(role: Role, required: &[Role]) -> bool {
    required.contains(&role)
}

/// Guard a handler: allow iff the user's role is in `required`.
pub fn authorize(user: &AuthenticatedUser, required: &[Role]) -> Result<(), AuthError> {
    if permitted(user.role, required) {
        Ok(())
    } else {
        Err(AuthError::InsufficientRole)
    }
}
