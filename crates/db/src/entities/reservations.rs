//! `SeaORM` Entity for reservations table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A booking of a property, with amounts fixed at creation time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    /// Reservation ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: i32,
    /// Booked property.
    pub property_id: Uuid,
    /// Property-channel link the booking came through, when any.
    pub property_channel_id: Option<Uuid>,
    /// Guest record, when linked.
    pub guest_id: Option<Uuid>,
    /// Status name, resolved against the tenant's settings.
    pub status: String,
    /// Reservation type name, resolved against the tenant's settings.
    pub reservation_type: Option<String>,
    /// Check-in date.
    pub check_in: Date,
    /// Check-out date.
    pub check_out: Date,
    /// Total reservation amount.
    pub total_amount: Option<Decimal>,
    /// Commission charged by the channel.
    pub channel_commission: Option<Decimal>,
    /// Commission charged for payment collection.
    pub collection_commission: Option<Decimal>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The booked property.
    #[sea_orm(
        belongs_to = "super::properties::Entity",
        from = "Column::PropertyId",
        to = "super::properties::Column::Id"
    )]
    Properties,
    /// The property-channel link.
    #[sea_orm(
        belongs_to = "super::property_channels::Entity",
        from = "Column::PropertyChannelId",
        to = "super::property_channels::Column::Id"
    )]
    PropertyChannels,
    /// The guest record.
    #[sea_orm(
        belongs_to = "super::people::Entity",
        from = "Column::GuestId",
        to = "super::people::Column::Id"
    )]
    People,
    /// Payments registered against this reservation.
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
}

impl Related<super::properties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Properties.def()
    }
}

impl Related<super::property_channels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PropertyChannels.def()
    }
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
