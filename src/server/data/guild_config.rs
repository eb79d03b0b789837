use migration::OnConflict;
use sea_orm::{
    prelude::Json, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

use crate::server::model::guild_config::{string_list, GuildConfig};

pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the configuration a specific owner holds for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `owner_id` - Discord ID of the configuration owner
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfig))` - Row found
    /// - `Ok(None)` - No row for this guild and owner
    /// - `Err(DbErr)` - Query failed or a list column is malformed
    pub async fn find(&self, guild_id: &str, owner_id: &str) -> Result<Option<GuildConfig>, DbErr> {
        entity::prelude::GuildConfig::find_by_id((guild_id.to_string(), owner_id.to_string()))
            .one(self.db)
            .await?
            .map(GuildConfig::from_entity)
            .transpose()
    }

    /// Reads only the whitelist for a guild and owner.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Current whitelist, empty when no row or NULL column
    /// - `Err(DbErr)` - Query failed or the column is malformed
    pub async fn find_whitelist(&self, guild_id: &str, owner_id: &str) -> Result<Vec<String>, DbErr> {
        let whitelist = entity::prelude::GuildConfig::find()
            .select_only()
            .column(entity::guild_config::Column::Whitelist)
            .filter(entity::guild_config::Column::GuildId.eq(guild_id))
            .filter(entity::guild_config::Column::OwnerId.eq(owner_id))
            .into_tuple::<Option<Json>>()
            .one(self.db)
            .await?
            .flatten();

        string_list(whitelist, "whitelist")
    }

    /// Fetches an owner's configurations for a set of guilds in a single query.
    ///
    /// # Arguments
    /// - `owner_id` - Discord ID of the configuration owner
    /// - `guild_ids` - Guilds to fetch; an empty slice skips the query entirely
    ///
    /// # Returns
    /// - `Ok(Vec<GuildConfig>)` - Rows found, in no particular order
    /// - `Err(DbErr)` - Query failed or a list column is malformed
    pub async fn find_many_for_owner(
        &self,
        owner_id: &str,
        guild_ids: &[String],
    ) -> Result<Vec<GuildConfig>, DbErr> {
        if guild_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::OwnerId.eq(owner_id))
            .filter(entity::guild_config::Column::GuildId.is_in(guild_ids.iter().cloned()))
            .all(self.db)
            .await?
            .into_iter()
            .map(GuildConfig::from_entity)
            .collect()
    }

    /// Lists every owner that holds a configuration for a guild.
    pub async fn find_owner_ids(&self, guild_id: &str) -> Result<Vec<String>, DbErr> {
        entity::prelude::GuildConfig::find()
            .select_only()
            .column(entity::guild_config::Column::OwnerId)
            .filter(entity::guild_config::Column::GuildId.eq(guild_id))
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Writes the whitelist for a guild and owner, creating the row if needed.
    ///
    /// Only the whitelist column is updated on conflict; other columns keep their
    /// stored values.
    pub async fn upsert_whitelist(
        &self,
        guild_id: &str,
        owner_id: &str,
        whitelist: &[String],
    ) -> Result<(), DbErr> {
        entity::prelude::GuildConfig::insert(entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            owner_id: ActiveValue::Set(owner_id.to_string()),
            whitelist: ActiveValue::Set(Some(Json::from(whitelist.to_vec()))),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::guild_config::Column::GuildId,
                entity::guild_config::Column::OwnerId,
            ])
            .update_column(entity::guild_config::Column::Whitelist)
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
