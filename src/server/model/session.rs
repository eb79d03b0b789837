//! Auth-provider user record returned for a validated session token.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::server::util::parse::is_decimal_digits;

/// Subset of the Supabase `GET /auth/v1/user` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub user_metadata: Option<Map<String, Value>>,
    #[serde(default)]
    pub identities: Option<Vec<SessionIdentity>>,
}

/// A provider identity linked to the session user.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionIdentity {
    #[serde(default)]
    pub id: Value,
}

impl SessionUser {
    /// Derives the caller's Discord ID from session metadata.
    ///
    /// Candidates are tried in order: `user_metadata.provider_id`,
    /// `user_metadata.sub`, then the first linked identity's `id`. The first
    /// non-empty candidate wins and only that one is validated; a non-numeric
    /// winner yields `None` rather than falling through to the next candidate.
    pub fn metadata_owner_id(&self) -> Option<String> {
        let metadata = self.user_metadata.as_ref();
        let first_identity = self
            .identities
            .as_ref()
            .and_then(|identities| identities.first())
            .map(|identity| &identity.id);

        let candidate = [
            metadata.and_then(|m| m.get("provider_id")),
            metadata.and_then(|m| m.get("sub")),
            first_identity,
        ]
        .into_iter()
        .flatten()
        .find_map(non_empty_text)?;

        is_decimal_digits(&candidate).then_some(candidate)
    }
}

/// Textual form of a metadata value, or `None` when the value is empty, null,
/// `false`, or zero.
fn non_empty_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
