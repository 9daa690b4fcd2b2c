use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No token was supplied in the `Authorization` header.
    #[error("Missing authorization token")]
    MissingToken,

    /// The supplied token failed signature verification or claim decoding.
    #[error("Invalid token")]
    InvalidToken,

    /// The token verified but the user it references no longer exists.
    #[error("Token references unknown user {0}")]
    UserNotFound(i32),

    /// Login failed. Deliberately covers both unknown email and wrong
    /// password so the response never reveals which one was at fault.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Token signing failed. This is a server-side fault, not a client error.
    #[error("Failed to create token")]
    TokenCreation,
}

/// Converts authentication errors into HTTP responses.
///
/// Every credential or token failure maps to 401 Unauthorized with a
/// client-safe message; only `TokenCreation` is a 500. Auth failures never
/// use 404, which is reserved for missing resources.
///
/// # Returns
/// - 401 Unauthorized - Missing/invalid token, unknown token subject, bad credentials
/// - 500 Internal Server Error - Token signing failure
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken | Self::UserNotFound(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid token".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::TokenCreation => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
