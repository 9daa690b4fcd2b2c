use axum::{
    extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json,
};

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::api::{CommentRefDto, VideoRefDto},
    service::engagement::EngagementService,
    state::AppState,
};

/// POST /video_likes - Like a video
///
/// Repeats from the same user accumulate; there is no toggle or dedup.
///
/// # Authentication
/// Raw token in the `Authorization` header.
///
/// # Returns
/// - `200 OK`: The created like row
/// - `401 Unauthorized`: Missing/invalid token
/// - `404 Not Found`: Target video does not exist
pub async fn like_video(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<VideoRefDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let reaction = EngagementService::new(&state.db)
        .like_video(caller.user.id, body.video_id)
        .await?;

    Ok((StatusCode::OK, Json(reaction.into_dto())))
}

/// POST /video_dislikes - Dislike a video
///
/// # Returns
/// - `200 OK`: The created dislike row
/// - `401 Unauthorized`: Missing/invalid token
/// - `404 Not Found`: Target video does not exist
pub async fn dislike_video(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<VideoRefDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let reaction = EngagementService::new(&state.db)
        .dislike_video(caller.user.id, body.video_id)
        .await?;

    Ok((StatusCode::OK, Json(reaction.into_dto())))
}

/// POST /comment_likes - Like a comment
///
/// # Returns
/// - `200 OK`: The created like row
/// - `401 Unauthorized`: Missing/invalid token
/// - `404 Not Found`: Target comment does not exist
pub async fn like_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CommentRefDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let reaction = EngagementService::new(&state.db)
        .like_comment(caller.user.id, body.comment_id)
        .await?;

    Ok((StatusCode::OK, Json(reaction.into_dto())))
}

/// POST /comment_dislikes - Dislike a comment
///
/// # Returns
/// - `200 OK`: The created dislike row
/// - `401 Unauthorized`: Missing/invalid token
/// - `404 Not Found`: Target comment does not exist
pub async fn dislike_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CommentRefDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let reaction = EngagementService::new(&state.db)
        .dislike_comment(caller.user.id, body.comment_id)
        .await?;

    Ok((StatusCode::OK, Json(reaction.into_dto())))
}

/// GET /likedVideos - List the videos the caller has liked
///
/// # Authentication
/// Raw token in the `Authorization` header.
///
/// # Returns
/// - `200 OK`: JSON array of like rows, each with its video and the video's owner
/// - `401 Unauthorized`: Missing/invalid token
pub async fn liked_videos(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let liked = EngagementService::new(&state.db)
        .liked_videos(caller.user.id)
        .await?;

    let dtos: Vec<_> = liked.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
