//! `SeaORM` Entity for people table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::PersonType;

/// A unified contact record: guests, providers, and channel owners.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "people")]
pub struct Model {
    /// Person ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Role of this record in the directory.
    pub person_type: PersonType,
    /// First name (individuals).
    pub first_name: Option<String>,
    /// Last name (individuals).
    pub last_name: Option<String>,
    /// Company name (legal entities).
    pub company_name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Fiscal identifier (NIF/CIF).
    pub tax_id: Option<String>,
    /// Fiscal address.
    pub fiscal_address: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Reservations where this person is the guest.
    #[sea_orm(has_many = "super::reservations::Entity")]
    Reservations,
    /// Expenses where this person is the vendor.
    #[sea_orm(has_many = "super::expenses::Entity")]
    Expenses,
    /// Channels owned by this person.
    #[sea_orm(has_many = "super::channels::Entity")]
    Channels,
}

impl Related<super::reservations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl Related<super::expenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl Related<super::channels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Channels.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
