use axum::{
    extract::{Multipart, Path, State},
    http::HeaderMap,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{api::SearchDto, video::CreateVideoParam},
    service::video::VideoService,
    state::AppState,
};

/// POST /video - Upload a video
///
/// Multipart form with text fields `title`, `description`, optional
/// `thumbnail`, and the file under the `url` field. The file is stored under
/// a generated key; the client filename only contributes its extension.
///
/// # Authentication
/// Raw token in the `Authorization` header.
///
/// # Returns
/// - `200 OK`: The created video record
/// - `400 Bad Request`: Malformed multipart body or missing fields
/// - `401 Unauthorized`: Missing/invalid token
/// - `500 Internal Server Error`: Filesystem or database error
pub async fn create_video(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut thumbnail: Option<String> = None;
    let mut file: Option<(Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        // The field name must be cloned out before the field is consumed
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "title" => {
                title = Some(read_text(&name, field).await?);
            }
            "description" => {
                description = Some(read_text(&name, field).await?);
            }
            "thumbnail" => {
                thumbnail = Some(read_text(&name, field).await?);
            }
            "url" => {
                let file_name = field.file_name().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid file field: {}", e)))?;
                file = Some((file_name, data.to_vec()));
            }
            _ => {}
        }
    }

    let title = title.ok_or_else(|| AppError::BadRequest("Missing field: title".to_string()))?;
    let description =
        description.ok_or_else(|| AppError::BadRequest("Missing field: description".to_string()))?;
    let (file_name, data) =
        file.ok_or_else(|| AppError::BadRequest("Missing file field: url".to_string()))?;

    let url = state.uploads.save(file_name.as_deref(), &data).await?;

    let video = VideoService::new(&state.db)
        .create(CreateVideoParam {
            title,
            description,
            url,
            thumbnail,
            user_id: caller.user.id,
        })
        .await?;

    Ok((StatusCode::OK, Json(video.into_dto())))
}

async fn read_text(
    name: &str,
    field: axum::extract::multipart::Field<'_>,
) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid field {}: {}", name, e)))
}

/// GET /videos - List every video with its full detail shape
///
/// # Returns
/// - `200 OK`: JSON array of video details
/// - `500 Internal Server Error`: Database error
pub async fn get_videos(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let details = VideoService::new(&state.db).list().await?;

    let dtos: Vec<_> = details.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /videos/{id} - Load one video with its full detail shape
///
/// # Returns
/// - `200 OK`: Video detail
/// - `404 Not Found`: No video with that id
/// - `500 Internal Server Error`: Database error
pub async fn get_video(
    State(state): State<AppState>,
    Path(video_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detail = VideoService::new(&state.db).get(video_id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// POST /search - Search videos by title substring
///
/// # Returns
/// - `200 OK`: JSON array of matching videos with their owners (empty on no match)
/// - `500 Internal Server Error`: Database error
pub async fn search(
    State(state): State<AppState>,
    Json(body): Json<SearchDto>,
) -> Result<impl IntoResponse, AppError> {
    let hits = VideoService::new(&state.db).search(&body.searched_text).await?;

    let dtos: Vec<_> = hits.into_iter().map(|h| h.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
