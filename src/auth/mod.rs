// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

//! # Authentication and Authorization
//!
//! This module is the access-control core of the service.
//!
//! ## Auth Flow
//!
//! 1. Client posts form credentials to `/token`
//! 2. [`service::authenticate`] looks the user up in the read-only
//!    [`UserDirectory`], verifies the bcrypt hash, and has the
//!    [`TokenService`] issue an HS256-signed JWT
//! 3. Client sends `Authorization: Bearer <token>` on protected calls
//! 4. The [`Auth`] extractor verifies signature and expiry and yields an
//!    [`AuthenticatedUser`]
//! 5. The handler checks the user's role against its declared required-role
//!    set via [`policy::authorize`]
//!
//! ## Security
//!
//! - The signing secret is loaded once at startup and never logged
//! - Unknown username and wrong password produce identical responses
//! - Malformed, forged and expired tokens produce identical responses
//! - Token validity is stateless; nothing is stored per session

pub mod claims;
pub mod directory;
pub mod error;
pub mod extractor;
pub mod password;
pub mod policy;
pub mod roles;
pub mod service;
pub mod tokens;

pub use claims::AuthenticatedUser;
pub use directory::{UserDirectory, UserRecord};
pub use error::AuthError;
pub use extractor::Auth;
pub use roles::Role;
pub use tokens::TokenService;
