//! `SeaORM` active enums mapped to Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role of a person record (`person_type` Postgres enum).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "person_type")]
#[serde(rename_all = "snake_case")]
pub enum PersonType {
    /// A guest staying at a property.
    #[sea_orm(string_value = "guest")]
    Guest,
    /// A service provider.
    #[sea_orm(string_value = "provider")]
    Provider,
    /// The owner/contact behind a distribution channel.
    #[sea_orm(string_value = "distribution_channel")]
    DistributionChannel,
    /// Anything else.
    #[sea_orm(string_value = "other")]
    Other,
}

/// Lifecycle status of an expense (`expense_status` Postgres enum).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "expense_status")]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    /// Registered but not yet settled.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Settled.
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Cancelled, kept for the record.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl From<rentora_core::people::PersonType> for PersonType {
    fn from(value: rentora_core::people::PersonType) -> Self {
        match value {
            rentora_core::people::PersonType::Guest => Self::Guest,
            rentora_core::people::PersonType::Provider => Self::Provider,
            rentora_core::people::PersonType::DistributionChannel => Self::DistributionChannel,
            rentora_core::people::PersonType::Other => Self::Other,
        }
    }
}

impl From<PersonType> for rentora_core::people::PersonType {
    fn from(value: PersonType) -> Self {
        match value {
            PersonType::Guest => Self::Guest,
            PersonType::Provider => Self::Provider,
            PersonType::DistributionChannel => Self::DistributionChannel,
            PersonType::Other => Self::Other,
        }
    }
}

impl From<rentora_core::expenses::ExpenseStatus> for ExpenseStatus {
    fn from(value: rentora_core::expenses::ExpenseStatus) -> Self {
        match value {
            rentora_core::expenses::ExpenseStatus::Pending => Self::Pending,
            rentora_core::expenses::ExpenseStatus::Completed => Self::Completed,
            rentora_core::expenses::ExpenseStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl From<ExpenseStatus> for rentora_core::expenses::ExpenseStatus {
    fn from(value: ExpenseStatus) -> Self {
        match value {
            ExpenseStatus::Pending => Self::Pending,
            ExpenseStatus::Completed => Self::Completed,
            ExpenseStatus::Cancelled => Self::Cancelled,
        }
    }
}
