//! People directory repository.

use sea_orm::sea_query::{Expr, extension::postgres::PgExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use rentora_core::people::{PeopleError, PersonType, normalize_query, validate_person_name};

use crate::entities::{people, sea_orm_active_enums};

/// Error types for people directory operations.
#[derive(Debug, thiserror::Error)]
pub enum PersonError {
    /// Validation failed before any database work.
    #[error(transparent)]
    Validation(#[from] PeopleError),

    /// Person not found.
    #[error("Person not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a person record.
#[derive(Debug, Clone, Default)]
pub struct CreatePersonInput {
    /// Role of the record in the directory.
    pub person_type: Option<PersonType>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Company name.
    pub company_name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Fiscal identifier.
    pub tax_id: Option<String>,
    /// Fiscal address.
    pub fiscal_address: Option<String>,
}

/// Patch for updating a person record. `Some` sets a column, `None` leaves it.
#[derive(Debug, Clone, Default)]
pub struct UpdatePersonInput {
    /// New role.
    pub person_type: Option<PersonType>,
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New company name.
    pub company_name: Option<String>,
    /// New contact email.
    pub email: Option<String>,
    /// New contact phone.
    pub phone: Option<String>,
    /// New fiscal identifier.
    pub tax_id: Option<String>,
    /// New fiscal address.
    pub fiscal_address: Option<String>,
}

/// Parameters for a directory search.
#[derive(Debug, Clone)]
pub struct SearchPeopleParams {
    /// Raw search query; empty or whitespace short-circuits to no results.
    pub query: String,
    /// Person type to scope the search to.
    pub person_type: Option<PersonType>,
    /// Maximum number of results.
    pub limit: u64,
}

/// People repository for CRUD and search operations.
#[derive(Debug, Clone)]
pub struct PersonRepository {
    db: DatabaseConnection,
}

impl PersonRepository {
    /// Creates a new people repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists people, most recently updated first, optionally scoped by type.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        person_type: Option<PersonType>,
    ) -> Result<Vec<people::Model>, PersonError> {
        let mut query = people::Entity::find().order_by_desc(people::Column::UpdatedAt);

        if let Some(pt) = person_type {
            query =
                query.filter(people::Column::PersonType.eq(sea_orm_active_enums::PersonType::from(pt)));
        }

        Ok(query.all(&self.db).await?)
    }

    /// Finds a person by ID. Absence is `None`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<people::Model>, PersonError> {
        Ok(people::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Creates a person record.
    ///
    /// The name invariant (first name or company required) is checked before
    /// any database work.
    ///
    /// # Errors
    ///
    /// Returns a validation error when both name fields are empty, or a
    /// database error if the insert fails.
    pub async fn create(&self, input: CreatePersonInput) -> Result<people::Model, PersonError> {
        validate_person_name(input.first_name.as_deref(), input.company_name.as_deref())?;

        let now = chrono::Utc::now().into();
        let person = people::ActiveModel {
            id: Set(Uuid::new_v4()),
            person_type: Set(input.person_type.unwrap_or(PersonType::Other).into()),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            company_name: Set(input.company_name),
            email: Set(input.email),
            phone: Set(input.phone),
            tax_id: Set(input.tax_id),
            fiscal_address: Set(input.fiscal_address),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(person.insert(&self.db).await?)
    }

    /// Applies a patch to a person record and stamps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the person does not exist, or a database error
    /// if the update fails.
    pub async fn update(
        &self,
        id: Uuid,
        patch: UpdatePersonInput,
    ) -> Result<people::Model, PersonError> {
        let person = self
            .find_by_id(id)
            .await?
            .ok_or(PersonError::NotFound(id))?;

        let mut active: people::ActiveModel = person.into();
        if let Some(pt) = patch.person_type {
            active.person_type = Set(pt.into());
        }
        if let Some(first_name) = patch.first_name {
            active.first_name = Set(Some(first_name));
        }
        if let Some(last_name) = patch.last_name {
            active.last_name = Set(Some(last_name));
        }
        if let Some(company_name) = patch.company_name {
            active.company_name = Set(Some(company_name));
        }
        if let Some(email) = patch.email {
            active.email = Set(Some(email));
        }
        if let Some(phone) = patch.phone {
            active.phone = Set(Some(phone));
        }
        if let Some(tax_id) = patch.tax_id {
            active.tax_id = Set(Some(tax_id));
        }
        if let Some(fiscal_address) = patch.fiscal_address {
            active.fiscal_address = Set(Some(fiscal_address));
        }
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Hard-deletes a person record.
    ///
    /// References from reservations, expenses, and channels are cleared by
    /// the store's `ON DELETE SET NULL` constraints.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the person does not exist, or a database error
    /// if the delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<(), PersonError> {
        let person = self
            .find_by_id(id)
            .await?
            .ok_or(PersonError::NotFound(id))?;

        person.delete(&self.db).await?;
        Ok(())
    }

    /// Case-insensitive substring search across name and contact fields.
    ///
    /// Empty or whitespace queries return an empty result set without
    /// touching the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn search(
        &self,
        params: SearchPeopleParams,
    ) -> Result<Vec<people::Model>, PersonError> {
        let Some(query) = normalize_query(&params.query) else {
            return Ok(vec![]);
        };
        let pattern = format!("%{query}%");

        let matches_any_field = Condition::any()
            .add(Expr::col(people::Column::FirstName).ilike(pattern.clone()))
            .add(Expr::col(people::Column::LastName).ilike(pattern.clone()))
            .add(Expr::col(people::Column::CompanyName).ilike(pattern.clone()))
            .add(Expr::col(people::Column::Email).ilike(pattern.clone()))
            .add(Expr::col(people::Column::Phone).ilike(pattern));

        let mut search = people::Entity::find().filter(matches_any_field);
        if let Some(pt) = params.person_type {
            search = search
                .filter(people::Column::PersonType.eq(sea_orm_active_enums::PersonType::from(pt)));
        }

        Ok(search
            .order_by_desc(people::Column::UpdatedAt)
            .limit(params.limit)
            .all(&self.db)
            .await?)
    }
}

/// Display name for a person: company name, else "first last".
#[must_use]
pub fn display_name(person: &people::Model) -> String {
    if let Some(company) = person
        .company_name
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        return company.to_string();
    }

    let first = person.first_name.as_deref().unwrap_or_default();
    let last = person.last_name.as_deref().unwrap_or_default();
    format!("{first} {last}").trim().to_string()
}
