// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

//! Signed access token issuance and verification.
//!
//! Tokens are HS-family JWTs signed with a process-wide symmetric secret.
//! Validity is entirely stateless: signature plus expiry at verification
//! time, nothing stored server-side.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::time::Duration;

use super::claims::{AccessClaims, AuthenticatedUser};
use super::error::AuthError;
use super::roles::Role;

/// Issues and verifies signed access tokens.
///
/// Holds the derived signing keys for the process lifetime. The secret itself
/// is dropped after key derivation and never logged.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service from the configured secret.
    ///
    /// `ttl` is the lifetime stamped into every issued token. There is no
    /// unbounded default: callers always pass an explicit duration.
    pub fn new(secret: &str, algorithm: Algorithm, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            ttl,
        }
    }

    /// Issue a signed token for `username` with the given role.
    ///
    /// Claims: `sub`, `role`, `iat = now`, `exp = now + ttl`.
    pub fn issue(&self, username: &str, role: Role) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            sub: username.to_string(),
            role,
            iat: now,
            exp: now + self.ttl.as_secs() as i64,
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenCreation)
    }

    /// Verify a token string and extract the authenticated user.
    ///
    /// Fails with [`AuthError::MalformedToken`] when the string is not a
    /// three-segment JWT or required claims are missing,
    /// [`AuthError::InvalidSignature`] when the recomputed signature does not
    /// match, and [`AuthError::TokenExpired`] when `exp` is in the past.
    /// No expiry leeway: a token is expired the second after `exp`.
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::MalformedToken,
            })?;

        Ok(token_data.claims.into())
    }

    /// Configured token lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

    const SECRET: &str = "unit-test-secret";

    fn service() -> TokenService {
        TokenService::new(SECRET, Algorithm::HS256, Duration::from_secs(1800))
    }

    /// Re-sign arbitrary claims with the test secret.
    fn sign_claims(claims: &serde_json::Value) -> String {
        let key = EncodingKey::from_secret(SECRET.as_bytes());
        encode(&Header::new(Algorithm::HS256), claims, &key).unwrap()
    }

    #[test]
    fn issue_then_verify_round_trips_subject_and_role() {
        let svc = service();
        let token = svc.issue("alice", Role::Moderator).unwrap();

        let user = svc.verify(&token).unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, Role::Moderator);
    }

    #[test]
    fn issued_claims_carry_explicit_expiry() {
        let svc = service();
        let token = svc.issue("alice", Role::Viewer).unwrap();

        // Decode the payload segment directly to inspect the raw claims.
        let payload = token.split('.').nth(1).unwrap();
        let bytes = URL_SAFE_NO_PAD.decode(payload).unwrap();
        let claims: AccessClaims = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 1800);
    }

    #[test]
    fn expired_token_with_valid_signature_is_token_expired() {
        let svc = service();
        let now = Utc::now().timestamp();
        let token = sign_claims(&serde_json::json!({
            "sub": "alice",
            "role": "viewer",
            "iat": now - 3600,
            "exp": now - 60,
        }));

        assert_eq!(svc.verify(&token), Err(AuthError::TokenExpired));
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid_signature() {
        let svc = service();
        let other = TokenService::new("other-secret", Algorithm::HS256, Duration::from_secs(1800));
        let token = other.issue("alice", Role::Admin).unwrap();

        assert_eq!(svc.verify(&token), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn flipped_bit_in_signature_is_invalid_signature() {
        let svc = service();
        let token = svc.issue("alice", Role::Admin).unwrap();

        let (prefix, signature) = token.rsplit_once('.').unwrap();
        let mut bytes = URL_SAFE_NO_PAD.decode(signature).unwrap();
        bytes[0] ^= 0x01;
        let tampered = format!("{prefix}.{}", URL_SAFE_NO_PAD.encode(bytes));

        assert_eq!(svc.verify(&tampered), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn flipped_bit_in_payload_is_invalid_signature() {
        let svc = service();
        let token = svc.issue("alice", Role::Viewer).unwrap();

        let segments: Vec<&str> = token.split('.').collect();
        let mut payload = URL_SAFE_NO_PAD.decode(segments[1]).unwrap();
        // Flip one bit inside the subject; the signature no longer matches.
        payload[10] ^= 0x01;
        let tampered = format!(
            "{}.{}.{}",
            segments[0],
            URL_SAFE_NO_PAD.encode(payload),
            segments[2]
        );

        assert_eq!(svc.verify(&tampered), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn garbage_and_truncated_tokens_are_malformed() {
        let svc = service();
        assert_eq!(svc.verify("not-a-token"), Err(AuthError::MalformedToken));
        assert_eq!(svc.verify(""), Err(AuthError::MalformedToken));

        let token = svc.issue("alice", Role::Viewer).unwrap();
        let two_segments = token.rsplit_once('.').unwrap().0;
        assert_eq!(svc.verify(two_segments), Err(AuthError::MalformedToken));
    }

    #[test]
    fn token_missing_role_claim_is_malformed() {
        let svc = service();
        let now = Utc::now().timestamp();
        let token = sign_claims(&serde_json::json!({
            "sub": "alice",
            "iat": now,
            "exp": now + 600,
        }));

        assert_eq!(svc.verify(&token), Err(AuthError::MalformedToken));
    }
}
