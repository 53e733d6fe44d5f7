//! `SeaORM` Entity for properties table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A rental property managed by a tenant.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    /// Property ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: i32,
    /// Property display name.
    pub name: String,
    /// Street address.
    pub address: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Channel links for this property.
    #[sea_orm(has_many = "super::property_channels::Entity")]
    PropertyChannels,
    /// Reservations for this property.
    #[sea_orm(has_many = "super::reservations::Entity")]
    Reservations,
}

impl Related<super::property_channels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PropertyChannels.def()
    }
}

impl Related<super::reservations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
