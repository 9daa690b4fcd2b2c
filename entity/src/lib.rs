pub mod prelude;

pub mod comment;
pub mod comment_dislike;
pub mod comment_like;
pub mod subscription;
pub mod user;
pub mod video;
pub mod video_dislike;
pub mod video_like;
pub mod watch_later;
