use sea_orm::entity::prelude::*;

/// Subscription edge between two users: `subscriber_id` follows `channel_id`.
///
/// Both relations point at the user table, so this entity deliberately does not
/// implement `Related<user::Entity>`; repositories filter on the column they need.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "subscription")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub subscriber_id: i32,
    pub channel_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SubscriberId",
        to = "super::user::Column::Id"
    )]
    Subscriber,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ChannelId",
        to = "super::user::Column::Id"
    )]
    Channel,
}

impl ActiveModelBehavior for ActiveModel {}
