//! Distribution channel repository.

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use uuid::Uuid;

use crate::entities::{channels, people};

/// Error types for channel operations.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// Channel not found.
    #[error("Channel not found: {0}")]
    ChannelNotFound(Uuid),

    /// Person not found.
    #[error("Person not found: {0}")]
    PersonNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Channel repository.
#[derive(Debug, Clone)]
pub struct ChannelRepository {
    db: DatabaseConnection,
}

impl ChannelRepository {
    /// Creates a new channel repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Points a distribution channel at a person record.
    ///
    /// # Errors
    ///
    /// Returns `ChannelNotFound`/`PersonNotFound` when either side is
    /// missing, or a database error if the update fails.
    pub async fn link_person(
        &self,
        channel_id: Uuid,
        person_id: Uuid,
    ) -> Result<channels::Model, ChannelError> {
        let channel = channels::Entity::find_by_id(channel_id)
            .one(&self.db)
            .await?
            .ok_or(ChannelError::ChannelNotFound(channel_id))?;

        people::Entity::find_by_id(person_id)
            .one(&self.db)
            .await?
            .ok_or(ChannelError::PersonNotFound(person_id))?;

        let mut active: channels::ActiveModel = channel.into();
        active.person_id = Set(Some(person_id));
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }
}
