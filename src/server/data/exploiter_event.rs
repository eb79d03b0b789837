use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

pub struct ExploiterEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExploiterEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts a guild's events created at or after `since`.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `action` - Restrict to this action, or `None` to count every action
    /// - `since` - Inclusive lower bound on `created_at`
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of matching events
    /// - `Err(DbErr)` - Query failed
    pub async fn count_since(
        &self,
        guild_id: &str,
        action: Option<&str>,
        since: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::ExploiterEvent::find()
            .filter(entity::exploiter_event::Column::GuildId.eq(guild_id))
            .filter(entity::exploiter_event::Column::CreatedAt.gte(since));

        if let Some(action) = action {
            query = query.filter(entity::exploiter_event::Column::Action.eq(action));
        }

        query.count(self.db).await
    }
}
