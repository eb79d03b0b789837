//! Guild configuration domain models.
//!
//! Converts nullable `guild_config` rows into fully defaulted values at the repository
//! boundary, and merges them with Discord guild listings for guild discovery.

use sea_orm::{prelude::Json, DbErr};

use crate::{
    model::{guild::GuildDto, guild_config::GuildConfigDto},
    server::model::discord::PartialGuild,
};

/// Configuration for one guild as seen by its owner.
///
/// Absent rows and NULL columns are both represented by defaults: not approved,
/// empty lists, no invite and no default channel.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildConfig {
    pub guild_id: String,
    pub approved: bool,
    pub server_invite: Option<String>,
    pub whitelist: Vec<String>,
    pub blacklisted: Vec<String>,
    pub default_channel: Option<String>,
}

impl GuildConfig {
    /// Configuration returned when no row exists for the guild and owner.
    pub fn defaults(guild_id: &str) -> Self {
        Self {
            guild_id: guild_id.to_string(),
            approved: false,
            server_invite: None,
            whitelist: Vec::new(),
            blacklisted: Vec::new(),
            default_channel: None,
        }
    }

    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Converted config with NULL columns defaulted
    /// - `Err(DbErr::Custom)` - A list column holds something other than an array of strings
    pub fn from_entity(entity: entity::guild_config::Model) -> Result<Self, DbErr> {
        Ok(Self {
            whitelist: string_list(entity.whitelist, "whitelist")?,
            blacklisted: string_list(entity.blacklisted, "blacklisted")?,
            guild_id: entity.guild_id,
            approved: entity.approved.unwrap_or(false),
            server_invite: entity.server_invite,
            default_channel: entity.default_channel,
        })
    }

    pub fn into_dto(self) -> GuildConfigDto {
        GuildConfigDto {
            guild_id: self.guild_id,
            approved: self.approved,
            server_invite: self.server_invite,
            whitelist: self.whitelist,
            blacklisted: self.blacklisted,
            default_channel: self.default_channel,
        }
    }
}

/// Decodes a nullable JSON list column, treating NULL as empty.
pub fn string_list(value: Option<Json>, column: &str) -> Result<Vec<String>, DbErr> {
    match value {
        None | Some(Json::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value).map_err(|e| {
            DbErr::Custom(format!(
                "Column '{}' is not a list of strings: {}",
                column, e
            ))
        }),
    }
}

/// A guild the caller administers, joined with the caller's configuration for it.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminGuild {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub approved: bool,
    pub server_invite: Option<String>,
    pub whitelist: Vec<String>,
}

impl AdminGuild {
    /// Joins a Discord guild listing with its configuration, or defaults when `config`
    /// is `None`.
    pub fn merge(guild: PartialGuild, config: Option<GuildConfig>) -> Self {
        let config = config.unwrap_or_else(|| GuildConfig::defaults(&guild.id));

        Self {
            id: guild.id,
            name: guild.name,
            icon: guild.icon,
            approved: config.approved,
            server_invite: config.server_invite,
            whitelist: config.whitelist,
        }
    }

    pub fn into_dto(self) -> GuildDto {
        GuildDto {
            id: self.id,
            name: self.name,
            icon: self.icon,
            approved: self.approved,
            server_invite: self.server_invite,
            whitelist: self.whitelist,
        }
    }
}
