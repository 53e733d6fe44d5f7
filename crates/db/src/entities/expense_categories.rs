//! `SeaORM` Entity for expense_categories table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A top-level expense category.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "expense_categories")]
pub struct Model {
    /// Category ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Display name.
    pub name: String,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Subcategories of this category.
    #[sea_orm(has_many = "super::expense_subcategories::Entity")]
    ExpenseSubcategories,
    /// Expenses in this category.
    #[sea_orm(has_many = "super::expenses::Entity")]
    Expenses,
}

impl Related<super::expense_subcategories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpenseSubcategories.def()
    }
}

impl Related<super::expenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
