use axum::{
    extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json,
};

use crate::{
    error::AppError, middleware::auth::AuthGuard, model::api::VideoRefDto,
    service::watch_later::WatchLaterService, state::AppState,
};

/// POST /watch_later - Save a video to the caller's watch-later list
///
/// # Authentication
/// Raw token in the `Authorization` header.
///
/// # Returns
/// - `200 OK`: The created row with its video and the video's owner
/// - `401 Unauthorized`: Missing/invalid token
/// - `404 Not Found`: Target video does not exist
pub async fn add_watch_later(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<VideoRefDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let entry = WatchLaterService::new(&state.db)
        .add(caller.user.id, body.video_id)
        .await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// GET /watch_later - List the caller's watch-later entries
///
/// # Authentication
/// Raw token in the `Authorization` header.
///
/// # Returns
/// - `200 OK`: JSON array of rows with videos and owners
/// - `401 Unauthorized`: Missing/invalid token
pub async fn get_watch_later(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let entries = WatchLaterService::new(&state.db).list(caller.user.id).await?;

    let dtos: Vec<_> = entries.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
