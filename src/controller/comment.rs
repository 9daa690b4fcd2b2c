use axum::{
    extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json,
};

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{api::CreateCommentDto, comment::CreateCommentParam},
    service::comment::CommentService,
    state::AppState,
};

/// POST /comments - Comment on a video
///
/// # Authentication
/// Raw token in the `Authorization` header.
///
/// # Returns
/// - `200 OK`: The created comment with (empty) reaction arrays
/// - `401 Unauthorized`: Missing/invalid token
/// - `404 Not Found`: Target video does not exist
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let detail = CommentService::new(&state.db)
        .create(CreateCommentParam {
            comment_text: body.comment_text,
            user_id: caller.user.id,
            video_id: body.video_id,
        })
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}
