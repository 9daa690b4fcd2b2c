//! Access token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying only the user id. They have no expiry, so a
//! `Validation` with the default required claims would reject every token this
//! service issues; the validation is configured accordingly at construction.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::auth::AuthError;

/// Claims encoded into every access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the authenticated user.
    pub sub: i32,
}

/// Service issuing and verifying access tokens.
///
/// Holds the derived signing keys so the secret is read from configuration
/// once at startup. Cloned into `AppState` per the shared-state pattern.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a token service from the shared secret.
    pub fn new(secret: &[u8]) -> Self {
        // Tokens carry no exp claim, so expiry validation must be off and the
        // default required claim set cleared.
        let mut validation = Validation::default();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issues a signed token for the given user id.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AuthError::TokenCreation)` - Signing failed
    pub fn issue(&self, user_id: i32) -> Result<String, AuthError> {
        encode(&Header::default(), &Claims { sub: user_id }, &self.encoding)
            .map_err(|_| AuthError::TokenCreation)
    }

    /// Verifies a token's signature and decodes its claims.
    ///
    /// The claims are shape-checked by deserialization; a token whose payload
    /// is not `{ "sub": <int> }` fails like any forged token.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is authentic
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed token, or wrong claim shape
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}
