use axum::{
    extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json,
};

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::{AuthResponseDto, LoginDto, RegisterDto},
        user::RegisterUserParam,
    },
    service::auth::AuthService,
    state::AppState,
};

/// POST /register - Create an account and sign in
///
/// # Returns
/// - `200 OK`: `{user, token}` with the new user's full profile
/// - `409 Conflict`: Email already registered
/// - `500 Internal Server Error`: Hashing, token, or database error
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    let (profile, token) = auth_service
        .register(RegisterUserParam {
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            password: body.password,
            image: body.image,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            user: profile.into_dto(),
            token,
        }),
    ))
}

/// POST /login - Verify credentials and sign in
///
/// # Returns
/// - `200 OK`: `{user, token}`
/// - `401 Unauthorized`: Unknown email or wrong password (same message for both)
/// - `500 Internal Server Error`: Hashing, token, or database error
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    let (profile, token) = auth_service.login(&body.email, &body.password).await?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            user: profile.into_dto(),
            token,
        }),
    ))
}

/// GET /validate - Resolve the caller's token to their full profile
///
/// # Authentication
/// Raw token in the `Authorization` header.
///
/// # Returns
/// - `200 OK`: Full user profile
/// - `401 Unauthorized`: Missing/invalid token or deleted account
pub async fn validate(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let profile = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}
