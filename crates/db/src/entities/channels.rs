//! `SeaORM` Entity for channels table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A distribution channel (booking platform or direct sales).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "channels")]
pub struct Model {
    /// Channel ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: i32,
    /// Channel display name.
    pub name: String,
    /// Contact record behind the channel, when linked.
    pub person_id: Option<Uuid>,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The channel's contact record.
    #[sea_orm(
        belongs_to = "super::people::Entity",
        from = "Column::PersonId",
        to = "super::people::Column::Id"
    )]
    People,
    /// Property links for this channel.
    #[sea_orm(has_many = "super::property_channels::Entity")]
    PropertyChannels,
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl Related<super::property_channels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PropertyChannels.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
