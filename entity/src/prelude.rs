pub use super::comment::Entity as Comment;
pub use super::comment_dislike::Entity as CommentDislike;
pub use super::comment_like::Entity as CommentLike;
pub use super::subscription::Entity as Subscription;
pub use super::user::Entity as User;
pub use super::video::Entity as Video;
pub use super::video_dislike::Entity as VideoDislike;
pub use super::video_like::Entity as VideoLike;
pub use super::watch_later::Entity as WatchLater;
