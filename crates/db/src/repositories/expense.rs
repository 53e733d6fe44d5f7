//! Expense repository.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use rentora_core::expenses::{CategoryRef, ExpenseRecord, ExpenseStatus};
use rentora_shared::TenantId;

use crate::entities::{expense_categories, expense_subcategories, expenses, people};
use crate::repositories::person::display_name;

/// Error types for expense operations.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    /// Expense not found.
    #[error("Expense not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    /// Owning tenant.
    pub tenant_id: TenantId,
    /// Free-text description.
    pub description: String,
    /// Expense amount.
    pub amount: Option<Decimal>,
    /// Expense date.
    pub expense_date: NaiveDate,
    /// Lifecycle status.
    pub status: ExpenseStatus,
    /// Category reference.
    pub category_id: Option<Uuid>,
    /// Subcategory reference.
    pub subcategory_id: Option<Uuid>,
    /// Vendor (person) reference.
    pub vendor_id: Option<Uuid>,
    /// Linked reservation.
    pub reservation_id: Option<Uuid>,
    /// Whether the expense recurs periodically.
    pub is_recurring: bool,
}

/// Patch for updating an expense. `Some` sets a column, `None` leaves it.
#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseInput {
    /// New description.
    pub description: Option<String>,
    /// New amount.
    pub amount: Option<Option<Decimal>>,
    /// New expense date.
    pub expense_date: Option<NaiveDate>,
    /// New status.
    pub status: Option<ExpenseStatus>,
    /// New category reference.
    pub category_id: Option<Option<Uuid>>,
    /// New subcategory reference.
    pub subcategory_id: Option<Option<Uuid>>,
    /// New vendor reference.
    pub vendor_id: Option<Option<Uuid>>,
    /// New recurring flag.
    pub is_recurring: Option<bool>,
}

/// Expense repository for CRUD and reference lists.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a tenant's expenses as filterable records, newest first, with
    /// vendor names batch-resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn list_records(
        &self,
        tenant_id: TenantId,
    ) -> Result<Vec<ExpenseRecord>, ExpenseError> {
        let rows = expenses::Entity::find()
            .filter(expenses::Column::TenantId.eq(tenant_id.into_inner()))
            .order_by_desc(expenses::Column::ExpenseDate)
            .all(&self.db)
            .await?;

        let vendor_ids: Vec<Uuid> = rows.iter().filter_map(|e| e.vendor_id).collect();
        let vendor_names: HashMap<Uuid, String> = if vendor_ids.is_empty() {
            HashMap::new()
        } else {
            people::Entity::find()
                .filter(people::Column::Id.is_in(vendor_ids))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, display_name(&p)))
                .collect()
        };

        Ok(rows
            .into_iter()
            .map(|row| ExpenseRecord {
                id: row.id,
                description: row.description,
                amount: row.amount,
                date: row.expense_date,
                status: row.status.into(),
                category_id: row.category_id,
                subcategory_id: row.subcategory_id,
                vendor_name: row.vendor_id.and_then(|id| vendor_names.get(&id).cloned()),
                reservation_id: row.reservation_id,
                is_recurring: row.is_recurring,
            })
            .collect())
    }

    /// Finds an expense by ID. Absence is `None`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<expenses::Model>, ExpenseError> {
        Ok(expenses::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Creates an expense.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create(&self, input: CreateExpenseInput) -> Result<expenses::Model, ExpenseError> {
        let now = chrono::Utc::now().into();
        let expense = expenses::ActiveModel {
            id: Set(Uuid::new_v4()),
            tenant_id: Set(input.tenant_id.into_inner()),
            description: Set(input.description),
            amount: Set(input.amount),
            expense_date: Set(input.expense_date),
            status: Set(input.status.into()),
            category_id: Set(input.category_id),
            subcategory_id: Set(input.subcategory_id),
            vendor_id: Set(input.vendor_id),
            reservation_id: Set(input.reservation_id),
            is_recurring: Set(input.is_recurring),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(expense.insert(&self.db).await?)
    }

    /// Applies a patch to an expense and stamps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the expense does not exist, or a database
    /// error if the update fails.
    pub async fn update(
        &self,
        id: Uuid,
        patch: UpdateExpenseInput,
    ) -> Result<expenses::Model, ExpenseError> {
        let expense = self
            .find_by_id(id)
            .await?
            .ok_or(ExpenseError::NotFound(id))?;

        let mut active: expenses::ActiveModel = expense.into();
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(amount) = patch.amount {
            active.amount = Set(amount);
        }
        if let Some(expense_date) = patch.expense_date {
            active.expense_date = Set(expense_date);
        }
        if let Some(status) = patch.status {
            active.status = Set(status.into());
        }
        if let Some(category_id) = patch.category_id {
            active.category_id = Set(category_id);
        }
        if let Some(subcategory_id) = patch.subcategory_id {
            active.subcategory_id = Set(subcategory_id);
        }
        if let Some(vendor_id) = patch.vendor_id {
            active.vendor_id = Set(vendor_id);
        }
        if let Some(is_recurring) = patch.is_recurring {
            active.is_recurring = Set(is_recurring);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Hard-deletes an expense.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the expense does not exist, or a database
    /// error if the delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<(), ExpenseError> {
        let expense = self
            .find_by_id(id)
            .await?
            .ok_or(ExpenseError::NotFound(id))?;

        expense.delete(&self.db).await?;
        Ok(())
    }

    /// Category reference list for the expense filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn categories(&self) -> Result<Vec<CategoryRef>, ExpenseError> {
        Ok(expense_categories::Entity::find()
            .order_by_asc(expense_categories::Column::Name)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|c| CategoryRef {
                id: c.id,
                name: c.name,
            })
            .collect())
    }

    /// Subcategory reference list for the expense filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn subcategories(&self) -> Result<Vec<CategoryRef>, ExpenseError> {
        Ok(expense_subcategories::Entity::find()
            .order_by_asc(expense_subcategories::Column::Name)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|c| CategoryRef {
                id: c.id,
                name: c.name,
            })
            .collect())
    }
}
