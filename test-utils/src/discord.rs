//! JSON payload builders mirroring Discord's REST API responses.
//!
//! These produce the exact shapes returned by `GET /users/@me` and
//! `GET /users/@me/guilds`, so tests exercise the same deserialization path as
//! production traffic.

use serde_json::{json, Value};

/// Permission bitmask string with only the administrator bit set.
pub const ADMIN: &str = "8";

/// Permission bitmask string with several bits set but not administrator.
pub const NOT_ADMIN: &str = "7";

/// Creates a `/users/@me` payload for the given user ID.
pub fn current_user(id: &str) -> Value {
    json!({
        "id": id,
        "username": format!("user{}", id),
        "global_name": null,
        "avatar": null,
        "discriminator": "0",
    })
}

/// Creates a single `/users/@me/guilds` entry.
///
/// # Arguments
/// - `id` - Guild snowflake
/// - `name` - Guild display name
/// - `permissions` - Decimal-string permission bitmask, as Discord sends it
pub fn partial_guild(id: &str, name: &str, permissions: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "icon": null,
        "owner": false,
        "permissions": permissions,
        "features": [],
    })
}

/// Creates a `/users/@me/guilds` entry with an icon hash.
pub fn partial_guild_with_icon(id: &str, name: &str, icon: &str, permissions: &str) -> Value {
    let mut guild = partial_guild(id, name, permissions);
    guild["icon"] = Value::String(icon.to_string());
    guild
}
