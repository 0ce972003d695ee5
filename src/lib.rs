// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

//! Rolegate - Role-Based Access Control API Service
//!
//! Credentials are exchanged for signed bearer tokens at `/token`; every
//! protected operation verifies the token and checks the caller's role
//! against the set of roles it declares.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Authentication and authorization core
//! - `config` - Environment configuration
//! - `models` - Request/response shapes
//! - `state` - Shared immutable application state

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod state;
