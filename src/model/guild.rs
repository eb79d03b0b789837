use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A guild the caller administers, merged with the caller's configuration for it.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct GuildDto {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub approved: bool,
    pub server_invite: Option<String>,
    pub whitelist: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct GuildListDto {
    pub guilds: Vec<GuildDto>,
}
