use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub image: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::video::Entity")]
    Video,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::video_like::Entity")]
    VideoLike,
    #[sea_orm(has_many = "super::video_dislike::Entity")]
    VideoDislike,
    #[sea_orm(has_many = "super::comment_like::Entity")]
    CommentLike,
    #[sea_orm(has_many = "super::comment_dislike::Entity")]
    CommentDislike,
    #[sea_orm(has_many = "super::watch_later::Entity")]
    WatchLater,
}

impl Related<super::video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Video.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::video_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VideoLike.def()
    }
}

impl Related<super::video_dislike::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VideoDislike.def()
    }
}

impl Related<super::comment_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CommentLike.def()
    }
}

impl Related<super::comment_dislike::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CommentDislike.def()
    }
}

impl Related<super::watch_later::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WatchLater.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
