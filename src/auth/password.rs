// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

//! Password verification against stored bcrypt hashes.
//!
//! bcrypt is slow, salted and irreversible; mismatch timing does not depend
//! on where the difference occurs. The plaintext never reaches a log event.

use bcrypt::DEFAULT_COST;

/// Check a plaintext password against a stored bcrypt hash.
///
/// An unparseable stored hash counts as a mismatch rather than an error:
/// at the login boundary both collapse into `InvalidCredentials` anyway,
/// and distinguishing them would leak directory state.
pub fn verify(plaintext: &str, stored_hash: &str) -> bool {
    bcrypt::verify(plaintext, stored_hash).unwrap_or(false)
}

/// Hash a plaintext password at the default cost.
///
/// Used by operators to produce directory entries (and by tests). Cost only
/// ever migrates upward; existing hashes keep working because the cost is
/// embedded in the hash string.
pub fn hash(plaintext: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plaintext, DEFAULT_COST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_password_verifies() {
        // Minimum cost keeps the test fast; verification is cost-agnostic.
        let hashed = bcrypt::hash("s3cret", 4).unwrap();
        assert!(verify("s3cret", &hashed));
    }

    #[test]
    fn wrong_password_fails() {
        let hashed = bcrypt::hash("s3cret", 4).unwrap();
        assert!(!verify("S3cret", &hashed));
        assert!(!verify("", &hashed));
    }

    #[test]
    fn invalid_stored_hash_fails_closed() {
        assert!(!verify("anything", "not-a-bcrypt-hash"));
        assert!(!verify("anything", ""));
    }

    #[test]
    fn hash_produces_verifiable_output() {
        let hashed = hash("hunter2").unwrap();
        assert!(verify("hunter2", &hashed));
    }
}
