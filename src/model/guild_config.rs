use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct GuildConfigDto {
    pub guild_id: String,
    pub approved: bool,
    pub server_invite: Option<String>,
    pub whitelist: Vec<String>,
    pub blacklisted: Vec<String>,
    pub default_channel: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct GuildConfigResponseDto {
    pub config: GuildConfigDto,
}

/// Request body for adding or removing a whitelist entry.
///
/// `entry` is optional at the wire level so a missing field surfaces as the
/// `missing_entry` error instead of a deserialization rejection.
#[derive(Serialize, Deserialize, ToSchema, Debug, Default)]
pub struct WhitelistEntryDto {
    #[serde(default)]
    pub entry: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct WhitelistDto {
    pub whitelist: Vec<String>,
}
