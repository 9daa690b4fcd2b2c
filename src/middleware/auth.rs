//! Request authentication guard.
//!
//! Clients send the raw token string in the `Authorization` header, with no
//! `Bearer ` prefix. The guard verifies the signature, then resolves the
//! claims to a live account; a token for a deleted user is as invalid as a
//! forged one.

use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    error::{auth::AuthError, AppError},
    model::user::UserProfile,
    service::{token::TokenService, user::UserService},
};

/// Guard resolving the `Authorization` header into an authenticated profile.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Requires a valid token and returns the caller's full profile.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - Token valid, account exists
    /// - `Err(AuthError::MissingToken)` - No `Authorization` header
    /// - `Err(AuthError::InvalidToken)` - Signature or claim shape invalid
    /// - `Err(AuthError::UserNotFound)` - Token valid but the account is gone
    pub async fn require(&self, headers: &HeaderMap) -> Result<UserProfile, AppError> {
        let token = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let claims = self.tokens.verify(token)?;

        let Some(profile) = UserService::new(self.db).find_profile(claims.sub).await? else {
            return Err(AuthError::UserNotFound(claims.sub).into());
        };

        Ok(profile)
    }
}
