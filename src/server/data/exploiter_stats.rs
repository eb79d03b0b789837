use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::stats::AllTimeCounts;

pub struct ExploiterStatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExploiterStatsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the precomputed all-time counts for a guild.
    ///
    /// # Returns
    /// - `Ok(Some(AllTimeCounts))` - Stats row exists
    /// - `Ok(None)` - Nothing recorded for this guild yet
    /// - `Err(DbErr)` - Query failed
    pub async fn find_by_guild_id(&self, guild_id: &str) -> Result<Option<AllTimeCounts>, DbErr> {
        let counts = entity::prelude::ExploiterStats::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
            .map(AllTimeCounts::from_entity);

        Ok(counts)
    }
}
