// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

use std::sync::Arc;

use crate::auth::{TokenService, UserDirectory};

/// Shared application state.
///
/// Everything in here is immutable after startup: the directory is read-only
/// and the token service holds fixed keys, so clones are cheap `Arc` bumps
/// and no locking is needed on the request path.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<UserDirectory>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(directory: UserDirectory, tokens: TokenService) -> Self {
        Self {
            directory: Arc::new(directory),
            tokens: Arc::new(tokens),
        }
    }
}
