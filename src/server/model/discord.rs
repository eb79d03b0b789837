//! Discord REST payloads consumed by the authorization gate and guild discovery.

use serde::Deserialize;
use serde_json::Value;
use serenity::all::Permissions;

use crate::server::util::parse::{is_decimal_digits, low_bits_of_decimal};

/// Subset of the `GET /users/@me` response.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub id: Option<String>,
}

impl CurrentUser {
    /// Returns the user's snowflake when it is a well-formed numeric ID.
    pub fn snowflake(self) -> Option<String> {
        self.id.filter(|id| is_decimal_digits(id))
    }
}

/// One entry of the `GET /users/@me/guilds` response.
///
/// `permissions` is kept as raw JSON since Discord sends a decimal string that can
/// exceed 53 bits, while older API versions sent a plain integer.
#[derive(Debug, Clone, Deserialize)]
pub struct PartialGuild {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub permissions: Option<Value>,
}

impl PartialGuild {
    /// Whether the caller holds the administrator bit in this guild.
    ///
    /// A missing or null bitmask counts as zero. Anything unparsable is treated as
    /// not admin.
    pub fn is_admin(&self) -> bool {
        match &self.permissions {
            Some(Value::String(bits)) => has_admin_permission(bits),
            Some(Value::Number(bits)) => bits
                .as_u64()
                .is_some_and(|bits| bits & admin_bit() == admin_bit()),
            _ => false,
        }
    }
}

fn admin_bit() -> u64 {
    Permissions::ADMINISTRATOR.bits()
}

/// Checks the administrator bit in a decimal-string permission bitmask of any size.
///
/// Only plain decimal digits are accepted; radix-prefixed forms such as `0x8` are
/// not admin. Surrounding whitespace is ignored. Empty or non-numeric strings are
/// not admin.
pub fn has_admin_permission(permissions: &str) -> bool {
    low_bits_of_decimal(permissions.trim()).is_some_and(|bits| bits & admin_bit() == admin_bit())
}
