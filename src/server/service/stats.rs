use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        exploiter_event::ExploiterEventRepository, exploiter_stats::ExploiterStatsRepository,
        guild_config::GuildConfigRepository,
    },
    error::{auth::AuthError, AppError},
    middleware::auth::Caller,
    model::stats::{AllTimeCounts, RangeCounts, StatsRange},
};

const BAN_ACTION: &str = "ban";
const SAFE_ACTION: &str = "safe";

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rejects callers who do not own any of a guild's configurations.
    ///
    /// A guild with no configuration rows is open to any admin.
    ///
    /// # Returns
    /// - `Ok(())` - No rows, or one of them belongs to the caller
    /// - `Err(AppError::AuthErr(Forbidden))` - Rows exist but none belong to the caller
    /// - `Err(AppError::StatsFailed)` - Owner lookup failed
    pub async fn ensure_owner(&self, guild_id: &str, caller: &Caller) -> Result<(), AppError> {
        let owner_ids = GuildConfigRepository::new(self.db)
            .find_owner_ids(guild_id)
            .await
            .map_err(AppError::StatsFailed)?;

        if !owner_ids.is_empty() && !owner_ids.iter().any(|owner_id| caller.owns(owner_id)) {
            tracing::debug!(
                "User {} does not own a config for guild {}",
                caller.owner_id,
                guild_id
            );
            return Err(AuthError::Forbidden.into());
        }

        Ok(())
    }

    /// Reads precomputed all-time counts, or zeros when the guild has none.
    pub async fn all_time(&self, guild_id: &str) -> Result<AllTimeCounts, AppError> {
        let counts = ExploiterStatsRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await
            .map_err(AppError::StatsFailed)?
            .unwrap_or_default();

        Ok(counts)
    }

    /// Counts ban, safe and all events since `range`'s cutoff relative to `now`.
    pub async fn in_range(
        &self,
        guild_id: &str,
        range: StatsRange,
        now: DateTime<Utc>,
    ) -> Result<RangeCounts, AppError> {
        let repo = ExploiterEventRepository::new(self.db);
        let since = range.cutoff(now);

        let ban = repo
            .count_since(guild_id, Some(BAN_ACTION), since)
            .await
            .map_err(AppError::StatsFailed)?;
        let safe = repo
            .count_since(guild_id, Some(SAFE_ACTION), since)
            .await
            .map_err(AppError::StatsFailed)?;
        let total = repo
            .count_since(guild_id, None, since)
            .await
            .map_err(AppError::StatsFailed)?;

        Ok(RangeCounts { ban, safe, total })
    }
}
