//! Exploiter event factory for creating individual moderation event rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test exploiter events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::exploiter_event::ExploiterEventFactory;
///
/// let event = ExploiterEventFactory::new(&db, "42")
///     .action("ban")
///     .created_at(Utc::now())
///     .build()
///     .await?;
/// ```
pub struct ExploiterEventFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    action: String,
    created_at: DateTime<Utc>,
}

impl<'a> ExploiterEventFactory<'a> {
    /// Creates a new factory for a `"ban"` event recorded now.
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            action: "ban".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the event into the database.
    pub async fn build(self) -> Result<entity::exploiter_event::Model, DbErr> {
        entity::exploiter_event::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            action: ActiveValue::Set(self.action),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with the given action at a fixed timestamp.
pub async fn create_event_at(
    db: &DatabaseConnection,
    guild_id: &str,
    action: &str,
    created_at: DateTime<Utc>,
) -> Result<entity::exploiter_event::Model, DbErr> {
    ExploiterEventFactory::new(db, guild_id)
        .action(action)
        .created_at(created_at)
        .build()
        .await
}
