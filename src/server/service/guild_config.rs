use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild_config::GuildConfigRepository, error::AppError,
    model::guild_config::GuildConfig,
};

pub struct GuildConfigService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the caller's configuration for a guild, or defaults when none is stored.
    pub async fn get(&self, guild_id: &str, owner_id: &str) -> Result<GuildConfig, AppError> {
        let repo = GuildConfigRepository::new(self.db);

        let config = repo
            .find(guild_id, owner_id)
            .await?
            .unwrap_or_else(|| GuildConfig::defaults(guild_id));

        Ok(config)
    }

    /// Adds an entry to the whitelist.
    ///
    /// The entry is trimmed and appended, then the list is deduplicated keeping the
    /// first occurrence of each value.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Whitelist as stored after the update
    /// - `Err(AppError::MissingEntry)` - Entry absent or blank, nothing written
    /// - `Err(AppError::UpdateFailed)` - Reading or writing the row failed
    pub async fn add_entry(
        &self,
        guild_id: &str,
        owner_id: &str,
        entry: Option<&str>,
    ) -> Result<Vec<String>, AppError> {
        let entry = normalize_entry(entry)?;

        self.edit_whitelist(guild_id, owner_id, |mut whitelist| {
            whitelist.push(entry.to_string());
            dedup_keep_first(whitelist)
        })
        .await
    }

    /// Removes every exact match of an entry from the whitelist.
    ///
    /// The row is written even when the entry was not present.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Whitelist as stored after the update
    /// - `Err(AppError::MissingEntry)` - Entry absent or blank, nothing written
    /// - `Err(AppError::UpdateFailed)` - Reading or writing the row failed
    pub async fn remove_entry(
        &self,
        guild_id: &str,
        owner_id: &str,
        entry: Option<&str>,
    ) -> Result<Vec<String>, AppError> {
        let entry = normalize_entry(entry)?;

        self.edit_whitelist(guild_id, owner_id, |whitelist| {
            whitelist
                .into_iter()
                .filter(|existing| existing != entry)
                .collect()
        })
        .await
    }

    async fn edit_whitelist<F>(
        &self,
        guild_id: &str,
        owner_id: &str,
        edit: F,
    ) -> Result<Vec<String>, AppError>
    where
        F: FnOnce(Vec<String>) -> Vec<String>,
    {
        let repo = GuildConfigRepository::new(self.db);

        let current = repo
            .find_whitelist(guild_id, owner_id)
            .await
            .map_err(AppError::UpdateFailed)?;

        let whitelist = edit(current);

        repo.upsert_whitelist(guild_id, owner_id, &whitelist)
            .await
            .map_err(AppError::UpdateFailed)?;

        tracing::debug!(
            "Updated whitelist for guild {} owner {} ({} entries)",
            guild_id,
            owner_id,
            whitelist.len()
        );

        Ok(whitelist)
    }
}

fn normalize_entry(entry: Option<&str>) -> Result<&str, AppError> {
    entry
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .ok_or(AppError::MissingEntry)
}

fn dedup_keep_first(entries: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}
