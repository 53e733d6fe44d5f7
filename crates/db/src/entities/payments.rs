//! `SeaORM` Entity for payments table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A payment registered against a reservation. Append-only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    /// Payment ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// The reservation being paid.
    pub reservation_id: Uuid,
    /// Paid amount.
    pub amount: Option<Decimal>,
    /// Date the payment was made.
    pub payment_date: Date,
    /// Payment method (transfer, card, cash, ...).
    pub method: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The paid reservation.
    #[sea_orm(
        belongs_to = "super::reservations::Entity",
        from = "Column::ReservationId",
        to = "super::reservations::Column::Id"
    )]
    Reservations,
}

impl Related<super::reservations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
