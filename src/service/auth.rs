//! Registration and login.
//!
//! Passwords are bcrypt-hashed before they reach the data layer; the plaintext
//! never leaves this module. Login failures collapse to one generic error so
//! the response never reveals whether the email or the password was wrong.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, RegisterUserParam, UserProfile},
    service::{token::TokenService, user::UserService},
};

/// Work factor for bcrypt password hashing.
const BCRYPT_COST: u32 = 12;

/// Service providing registration and credential verification.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account and signs the user in.
    ///
    /// Duplicate emails are detected through the unique constraint on the
    /// insert itself, so two concurrent registrations for the same address
    /// can't both succeed.
    ///
    /// # Returns
    /// - `Ok((UserProfile, String))` - Created profile and its access token
    /// - `Err(AppError::Conflict)` - The email is already registered
    /// - `Err(AppError)` - Hashing, token, or database error
    pub async fn register(
        &self,
        param: RegisterUserParam,
    ) -> Result<(UserProfile, String), AppError> {
        let password_hash = bcrypt::hash(&param.password, BCRYPT_COST)?;

        let user = UserRepository::new(self.db)
            .create(CreateUserParam {
                first_name: param.first_name,
                last_name: param.last_name,
                email: param.email,
                password_hash,
                image: param.image,
            })
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::Conflict("Email already registered".to_string())
                }
                _ => AppError::from(err),
            })?;

        let token = self.tokens.issue(user.id)?;
        let profile = UserService::new(self.db).profile_for(user).await?;

        Ok((profile, token))
    }

    /// Verifies credentials and signs the user in.
    ///
    /// # Returns
    /// - `Ok((UserProfile, String))` - Profile and a fresh access token
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError)` - Hashing, token, or database error
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(UserProfile, String), AppError> {
        let user = UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !bcrypt::verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(user.id)?;
        let profile = UserService::new(self.db).profile_for(user).await?;

        Ok((profile, token))
    }
}
