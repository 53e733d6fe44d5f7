//! `SeaORM` Entity for expenses table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ExpenseStatus;

/// An operating expense, optionally linked to a vendor and a reservation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    /// Expense ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: i32,
    /// Free-text description.
    pub description: String,
    /// Expense amount.
    pub amount: Option<Decimal>,
    /// Expense date.
    pub expense_date: Date,
    /// Lifecycle status.
    pub status: ExpenseStatus,
    /// Category reference.
    pub category_id: Option<Uuid>,
    /// Subcategory reference.
    pub subcategory_id: Option<Uuid>,
    /// Vendor (person) reference.
    pub vendor_id: Option<Uuid>,
    /// Linked reservation, when the expense belongs to one.
    pub reservation_id: Option<Uuid>,
    /// Whether the expense recurs periodically.
    pub is_recurring: bool,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The vendor person record.
    #[sea_orm(
        belongs_to = "super::people::Entity",
        from = "Column::VendorId",
        to = "super::people::Column::Id"
    )]
    People,
    /// The expense category.
    #[sea_orm(
        belongs_to = "super::expense_categories::Entity",
        from = "Column::CategoryId",
        to = "super::expense_categories::Column::Id"
    )]
    ExpenseCategories,
    /// The expense subcategory.
    #[sea_orm(
        belongs_to = "super::expense_subcategories::Entity",
        from = "Column::SubcategoryId",
        to = "super::expense_subcategories::Column::Id"
    )]
    ExpenseSubcategories,
    /// The linked reservation.
    #[sea_orm(
        belongs_to = "super::reservations::Entity",
        from = "Column::ReservationId",
        to = "super::reservations::Column::Id"
    )]
    Reservations,
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl Related<super::expense_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpenseCategories.def()
    }
}

impl Related<super::expense_subcategories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpenseSubcategories.def()
    }
}

impl Related<super::reservations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
