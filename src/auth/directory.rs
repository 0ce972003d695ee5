// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

//! Read-only user directory.
//!
//! Loaded once from a JSON file before the server accepts requests, then
//! never mutated. Updating a user means restarting the process with a new
//! file. Because the directory is immutable it can be shared across request
//! tasks without locking.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::roles::Role;

/// A single user entry as stored in the directory file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    /// Unique username, the lookup key
    pub username: String,
    /// bcrypt hash of the user's password
    pub password_hash: String,
    /// Role granted to this user
    pub role: Role,
}

/// Errors raised while loading the directory file.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read users file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse users file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate username in users file: {0}")]
    DuplicateUser(String),
}

/// In-memory, read-only user directory keyed by username.
#[derive(Debug)]
pub struct UserDirectory {
    users: HashMap<String, UserRecord>,
}

impl UserDirectory {
    /// Load the directory from a JSON file containing an array of
    /// `{username, password_hash, role}` records.
    ///
    /// A missing or unparseable file is a startup error: silently serving an
    /// empty directory would turn every login into an undiagnosable 401.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let records: Vec<UserRecord> =
            serde_json::from_str(&contents).map_err(|source| DirectoryError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        Self::from_records(records)
    }

    /// Build a directory from records already in memory.
    pub fn from_records(records: Vec<UserRecord>) -> Result<Self, DirectoryError> {
        let mut users = HashMap::with_capacity(records.len());
        for record in records {
            if users.contains_key(&record.username) {
                return Err(DirectoryError::DuplicateUser(record.username));
            }
            users.insert(record.username.clone(), record);
        }
        Ok(Self { users })
    }

    /// Look up a user by username.
    pub fn lookup(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    /// Number of loaded users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory has no users at all.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
