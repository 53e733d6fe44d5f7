//! Tenant settings repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use rentora_core::settings::{SettingValue, SettingsError};
use rentora_shared::TenantId;

use crate::entities::settings;

/// Error types for setting operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingError {
    /// The stored value does not match a supported shape.
    #[error(transparent)]
    InvalidValue(#[from] SettingsError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Settings repository for tenant-scoped configuration lookups.
#[derive(Debug, Clone)]
pub struct SettingRepository {
    db: DatabaseConnection,
}

impl SettingRepository {
    /// Creates a new settings repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a raw setting row by tenant and key.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get(
        &self,
        tenant_id: TenantId,
        key: &str,
    ) -> Result<Option<settings::Model>, SettingError> {
        Ok(settings::Entity::find()
            .filter(settings::Column::TenantId.eq(tenant_id.into_inner()))
            .filter(settings::Column::Key.eq(key))
            .one(&self.db)
            .await?)
    }

    /// Finds a setting and parses it into its typed shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored JSON matches neither
    /// supported shape.
    pub async fn get_value(
        &self,
        tenant_id: TenantId,
        key: &str,
    ) -> Result<Option<SettingValue>, SettingError> {
        let Some(row) = self.get(tenant_id, key).await? else {
            return Ok(None);
        };
        Ok(Some(SettingValue::parse(&row.value)?))
    }

    /// Creates or replaces a setting value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn upsert(
        &self,
        tenant_id: TenantId,
        key: &str,
        value: serde_json::Value,
    ) -> Result<settings::Model, SettingError> {
        let now = chrono::Utc::now().into();

        if let Some(existing) = self.get(tenant_id, key).await? {
            let mut active: settings::ActiveModel = existing.into();
            active.value = Set(value);
            active.updated_at = Set(now);
            return Ok(active.update(&self.db).await?);
        }

        let setting = settings::ActiveModel {
            id: Set(Uuid::new_v4()),
            tenant_id: Set(tenant_id.into_inner()),
            key: Set(key.to_string()),
            value: Set(value),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(setting.insert(&self.db).await?)
    }
}
