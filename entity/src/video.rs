use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "video")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub url: String,
    pub thumbnail: Option<String>,
    pub user_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::video_like::Entity")]
    VideoLike,
    #[sea_orm(has_many = "super::video_dislike::Entity")]
    VideoDislike,
    #[sea_orm(has_many = "super::watch_later::Entity")]
    WatchLater,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
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

impl Related<super::watch_later::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WatchLater.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
