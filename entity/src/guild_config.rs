use sea_orm::entity::prelude::*;

/// Per-owner moderation configuration for a Discord guild.
///
/// `whitelist` and `blacklisted` hold JSON arrays of strings.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "guild_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub owner_id: String,
    pub approved: Option<bool>,
    pub server_invite: Option<String>,
    #[sea_orm(column_type = "Json", nullable)]
    pub whitelist: Option<Json>,
    #[sea_orm(column_type = "Json", nullable)]
    pub blacklisted: Option<Json>,
    pub default_channel: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
