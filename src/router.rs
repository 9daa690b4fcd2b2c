use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::{
    controller::{auth, comment, engagement, user, video, watch_later},
    state::AppState,
};

/// Upper bound for request bodies, sized for video uploads.
const BODY_LIMIT: usize = 250 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/validate", get(auth::validate))
        .route("/video", post(video::create_video))
        .route("/users", get(user::get_users))
        .route("/users/{id}", get(user::get_user))
        .route("/videos", get(video::get_videos))
        .route("/videos/{id}", get(video::get_video))
        .route("/subscribe", patch(user::subscribe))
        .route("/video_likes", post(engagement::like_video))
        .route("/video_dislikes", post(engagement::dislike_video))
        .route("/comments", post(comment::create_comment))
        .route("/comment_likes", post(engagement::like_comment))
        .route("/comment_dislikes", post(engagement::dislike_comment))
        .route(
            "/watch_later",
            post(watch_later::add_watch_later).get(watch_later::get_watch_later),
        )
        .route("/likedVideos", get(engagement::liked_videos))
        .route("/usersToSubscribe", get(user::users_to_subscribe))
        .route("/search", post(video::search))
        .nest_service("/public", ServeDir::new(state.uploads.dir()))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
