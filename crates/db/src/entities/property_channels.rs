//! `SeaORM` Entity for property_channels table.
//!
//! The link between a property and a distribution channel carries the
//! channel-specific commission and VAT settings reservations inherit.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Association between a property and a distribution channel.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "property_channels")]
pub struct Model {
    /// Link ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Linked property.
    pub property_id: Uuid,
    /// Linked channel.
    pub channel_id: Uuid,
    /// Whether VAT is applied to commissions for this link.
    pub apply_vat: bool,
    /// VAT percentage for this link.
    pub vat_percent: Decimal,
    /// Default commission percentage, when the channel defines one.
    pub commission_percent: Option<Decimal>,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The linked property.
    #[sea_orm(
        belongs_to = "super::properties::Entity",
        from = "Column::PropertyId",
        to = "super::properties::Column::Id"
    )]
    Properties,
    /// The linked channel.
    #[sea_orm(
        belongs_to = "super::channels::Entity",
        from = "Column::ChannelId",
        to = "super::channels::Column::Id"
    )]
    Channels,
    /// Reservations booked through this link.
    #[sea_orm(has_many = "super::reservations::Entity")]
    Reservations,
}

impl Related<super::properties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Properties.def()
    }
}

impl Related<super::channels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Channels.def()
    }
}

impl Related<super::reservations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
