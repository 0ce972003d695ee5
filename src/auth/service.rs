// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

//! Authentication flow: credentials in, signed token out.

use tracing::{debug, info};

use super::directory::UserDirectory;
use super::error::AuthError;
use super::password;
use super::tokens::TokenService;

/// Exchange a username and password for a signed access token.
///
/// Unknown username and wrong password both return
/// [`AuthError::InvalidCredentials`]; nothing in the result reveals which
/// check failed, so the endpoint cannot be used to enumerate usernames.
pub fn authenticate(
    directory: &UserDirectory,
    tokens: &TokenService,
    username: &str,
    password_plaintext: &str,
) -> Result<String, AuthError> {
    let Some(user) = directory.lookup(username) else {
        debug!(username, "login rejected: unknown user");
        return Err(AuthError::InvalidCredentials);
    };

    if !password::verify(password_plaintext, &user.password_hash) {
        debug!(username, "login rejected: password mismatch");
        return Err(AuthError::InvalidCredentials);
    }

    let token = tokens.issue(&user.username, user.role)?;
    info!(username, role = %user.role, "login successful");
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::directory::UserRecord;
    use crate::auth::roles::Role;
    use jsonwebtoken::Algorithm;
    use std::time::Duration;

    fn fixtures() -> (UserDirectory, TokenService) {
        let directory = UserDirectory::from_records(vec![UserRecord {
            username: "alice".to_string(),
            password_hash: bcrypt::hash("wonderland", 4).unwrap(),
            role: Role::Moderator,
        }])
        .unwrap();
        let tokens = TokenService::new("test-secret", Algorithm::HS256, Duration::from_secs(1800));
        (directory, tokens)
    }

    #[test]
    fn valid_credentials_yield_decodable_token() {
        let (directory, tokens) = fixtures();
        let token = authenticate(&directory, &tokens, "alice", "wonderland").unwrap();

        let user = tokens.verify(&token).unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, Role::Moderator);
    }

    #[test]
    fn unknown_user_and_wrong_password_fail_identically() {
        let (directory, tokens) = fixtures();

        let unknown = authenticate(&directory, &tokens, "mallory", "wonderland");
        let wrong = authenticate(&directory, &tokens, "alice", "not-wonderland");

        assert_eq!(unknown, Err(AuthError::InvalidCredentials));
        assert_eq!(wrong, Err(AuthError::InvalidCredentials));
    }
}
