//! `SeaORM` Entity for expense_subcategories table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A subcategory under an expense category.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "expense_subcategories")]
pub struct Model {
    /// Subcategory ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Parent category.
    pub category_id: Uuid,
    /// Display name.
    pub name: String,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The parent category.
    #[sea_orm(
        belongs_to = "super::expense_categories::Entity",
        from = "Column::CategoryId",
        to = "super::expense_categories::Column::Id"
    )]
    ExpenseCategories,
    /// Expenses in this subcategory.
    #[sea_orm(has_many = "super::expenses::Entity")]
    Expenses,
}

impl Related<super::expense_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpenseCategories.def()
    }
}

impl Related<super::expenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
