use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    client::discord::DiscordClient,
    data::guild_config::GuildConfigRepository,
    error::AppError,
    middleware::auth::Caller,
    model::{
        discord::PartialGuild,
        guild_config::{AdminGuild, GuildConfig},
    },
};

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
    discord_client: &'a DiscordClient,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection, discord_client: &'a DiscordClient) -> Self {
        Self { db, discord_client }
    }

    /// Lists the guilds the caller administers, each merged with the caller's config.
    ///
    /// Discord's guild list is fetched once and filtered to guilds carrying the
    /// administrator bit, keeping Discord's order. Configurations for the remaining
    /// guilds are loaded in one query. If that query fails, every guild is merged with
    /// defaults instead of failing the request.
    ///
    /// # Arguments
    /// - `caller` - Authenticated caller whose Discord token and owner ID are used
    ///
    /// # Returns
    /// - `Ok(Vec<AdminGuild>)` - Administered guilds in Discord's order
    /// - `Err(AppError::DiscordFetchFailed)` - Guild list request or decoding failed
    pub async fn list_admin_guilds(&self, caller: &Caller) -> Result<Vec<AdminGuild>, AppError> {
        let guilds: Vec<PartialGuild> = self
            .discord_client
            .current_user_guilds(&caller.discord_token)
            .await
            .map_err(AppError::DiscordFetchFailed)?
            .into_iter()
            .filter(PartialGuild::is_admin)
            .collect();

        let guild_ids: Vec<String> = guilds.iter().map(|guild| guild.id.clone()).collect();
        let configs = self.configs_by_guild(&caller.owner_id, &guild_ids).await;

        tracing::debug!(
            "User {} administers {} guilds ({} configured)",
            caller.owner_id,
            guilds.len(),
            configs.len()
        );

        Ok(guilds
            .into_iter()
            .map(|guild| {
                let config = configs.get(&guild.id).cloned();
                AdminGuild::merge(guild, config)
            })
            .collect())
    }

    async fn configs_by_guild(
        &self,
        owner_id: &str,
        guild_ids: &[String],
    ) -> HashMap<String, GuildConfig> {
        let repo = GuildConfigRepository::new(self.db);

        match repo.find_many_for_owner(owner_id, guild_ids).await {
            Ok(configs) => configs
                .into_iter()
                .map(|config| (config.guild_id.clone(), config))
                .collect(),
            Err(e) => {
                tracing::warn!(
                    "Failed to load guild configs for {}, using defaults: {}",
                    owner_id,
                    e
                );
                HashMap::new()
            }
        }
    }
}
