//! Guild configuration fixtures for creating in-memory test data.

use entity::guild_config;
use sea_orm::prelude::Json;

/// Default test guild ID.
pub const DEFAULT_GUILD_ID: &str = "42";

/// Default test owner ID.
pub const DEFAULT_OWNER_ID: &str = "111";

/// Creates a guild configuration entity model with every nullable column NULL.
///
/// # Default Values
/// - guild_id: `"42"`
/// - owner_id: `"111"`
/// - all other columns: `None`
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let row = fixture::guild_config::entity();
/// assert!(row.whitelist.is_none());
/// ```
pub fn entity() -> guild_config::Model {
    guild_config::Model {
        guild_id: DEFAULT_GUILD_ID.to_string(),
        owner_id: DEFAULT_OWNER_ID.to_string(),
        approved: None,
        server_invite: None,
        whitelist: None,
        blacklisted: None,
        default_channel: None,
    }
}

/// Creates a fully populated guild configuration entity model.
pub fn populated_entity() -> guild_config::Model {
    guild_config::Model {
        approved: Some(true),
        server_invite: Some("https://discord.gg/example".to_string()),
        whitelist: Some(Json::from(vec!["alpha".to_string(), "beta".to_string()])),
        blacklisted: Some(Json::from(vec!["gamma".to_string()])),
        default_channel: Some("555".to_string()),
        ..entity()
    }
}
