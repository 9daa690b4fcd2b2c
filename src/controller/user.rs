use axum::{
    extract::{Path, State},
    http::HeaderMap,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError, middleware::auth::AuthGuard, model::api::SubscribeDto,
    service::user::UserService, state::AppState,
};

/// GET /users - List every user with their full profile graph
///
/// # Returns
/// - `200 OK`: JSON array of user profiles
/// - `500 Internal Server Error`: Database error
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let profiles = UserService::new(&state.db).list_profiles().await?;

    let dtos: Vec<_> = profiles.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /users/{id} - Load one user's full profile graph
///
/// # Returns
/// - `200 OK`: User profile
/// - `404 Not Found`: No user with that id
/// - `500 Internal Server Error`: Database error
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let profile = UserService::new(&state.db).get_profile(user_id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// PATCH /subscribe - Subscribe the caller to another user
///
/// # Authentication
/// Raw token in the `Authorization` header.
///
/// # Returns
/// - `200 OK`: The caller's refreshed profile, including the new edge
/// - `401 Unauthorized`: Missing/invalid token
/// - `404 Not Found`: Target user does not exist
pub async fn subscribe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<SubscribeDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let profile = UserService::new(&state.db)
        .subscribe(caller.user.id, body.subscribe_id)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// GET /usersToSubscribe - List the users the caller could subscribe to
///
/// Returns every user except the caller, as flat records.
///
/// # Authentication
/// Raw token in the `Authorization` header.
///
/// # Returns
/// - `200 OK`: JSON array of users
/// - `401 Unauthorized`: Missing/invalid token
pub async fn users_to_subscribe(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let users = UserService::new(&state.db).list_others(caller.user.id).await?;

    let dtos: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
