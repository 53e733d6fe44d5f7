//! `SeaORM` entity definitions.

pub mod channels;
pub mod expense_categories;
pub mod expense_subcategories;
pub mod expenses;
pub mod payments;
pub mod people;
pub mod properties;
pub mod property_channels;
pub mod reservations;
pub mod sea_orm_active_enums;
pub mod settings;
