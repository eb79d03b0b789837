//! Guild configuration factory for creating test config rows.
//!
//! This module provides factory methods for creating guild configuration entities with
//! sensible defaults. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{prelude::Json, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild configurations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_config::GuildConfigFactory;
///
/// let config = GuildConfigFactory::new(&db)
///     .guild_id("42")
///     .owner_id("111")
///     .approved(true)
///     .whitelist(["alpha"])
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    owner_id: String,
    approved: Option<bool>,
    server_invite: Option<String>,
    whitelist: Option<Json>,
    blacklisted: Option<Json>,
    default_channel: Option<String>,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new GuildConfigFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: unique numeric string
    /// - owner_id: unique numeric string
    /// - approved: `None`
    /// - server_invite, default_channel: `None`
    /// - whitelist, blacklisted: `None` (NULL column)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            owner_id: next_id().to_string(),
            approved: None,
            server_invite: None,
            whitelist: None,
            blacklisted: None,
            default_channel: None,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = owner_id.into();
        self
    }

    pub fn approved(mut self, approved: bool) -> Self {
        self.approved = Some(approved);
        self
    }

    pub fn server_invite(mut self, server_invite: impl Into<String>) -> Self {
        self.server_invite = Some(server_invite.into());
        self
    }

    pub fn default_channel(mut self, default_channel: impl Into<String>) -> Self {
        self.default_channel = Some(default_channel.into());
        self
    }

    /// Sets the whitelist column to a JSON array of the given entries.
    pub fn whitelist<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.whitelist = Some(to_json_list(entries));
        self
    }

    /// Sets the blacklisted column to a JSON array of the given entries.
    pub fn blacklisted<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklisted = Some(to_json_list(entries));
        self
    }

    /// Sets the whitelist column to an arbitrary JSON value.
    ///
    /// Used to seed malformed rows that a well-behaved writer would never produce.
    pub fn raw_whitelist(mut self, value: Json) -> Self {
        self.whitelist = Some(value);
        self
    }

    /// Builds and inserts the guild configuration into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_config::Model)` - Created config entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            owner_id: ActiveValue::Set(self.owner_id),
            approved: ActiveValue::Set(self.approved),
            server_invite: ActiveValue::Set(self.server_invite),
            whitelist: ActiveValue::Set(self.whitelist),
            blacklisted: ActiveValue::Set(self.blacklisted),
            default_channel: ActiveValue::Set(self.default_channel),
        }
        .insert(self.db)
        .await
    }
}

fn to_json_list<I, S>(entries: I) -> Json
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Json::from(entries.into_iter().map(Into::into).collect::<Vec<String>>())
}

/// Creates a guild configuration for the given guild and owner with default values.
///
/// Shorthand for `GuildConfigFactory::new(db).guild_id(..).owner_id(..).build().await`.
pub async fn create_guild_config(
    db: &DatabaseConnection,
    guild_id: &str,
    owner_id: &str,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db)
        .guild_id(guild_id)
        .owner_id(owner_id)
        .build()
        .await
}
