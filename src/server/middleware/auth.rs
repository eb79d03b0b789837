//! Authenticated-admin gate shared by every endpoint.
//!
//! The gate runs five stages in order and stops at the first failure:
//!
//! 1. `Authorization: Bearer <session>` must be present
//! 2. The auth provider must accept the session token
//! 3. `x-discord-token` must be present
//! 4. A numeric Discord ID must resolve, live from Discord or from session metadata
//! 5. The caller must hold the administrator bit in the target guild
//!
//! Stages 1-4 are `authenticate`, stage 5 is `require_guild_admin`, and `authorize`
//! composes both for guild-scoped routes.

use axum::http::{header, HeaderMap};

use crate::server::{
    client::{discord::DiscordClient, supabase::SupabaseAuthClient},
    error::auth::AuthError,
};

/// Header carrying the caller's Discord OAuth token.
pub const DISCORD_TOKEN_HEADER: &str = "x-discord-token";

const BEARER_PREFIX: &str = "Bearer ";

/// Identity resolved for an authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Discord ID used as `owner_id` for configuration rows.
    pub owner_id: String,
    /// Discord ID derived from session metadata alone, if any.
    pub session_owner_id: Option<String>,
    /// Token for calling Discord on the caller's behalf.
    pub discord_token: String,
}

impl Caller {
    /// Whether `owner_id` belongs to this caller under either resolved identity.
    pub fn owns(&self, owner_id: &str) -> bool {
        self.owner_id == owner_id || self.session_owner_id.as_deref() == Some(owner_id)
    }
}

pub struct AuthGuard<'a> {
    auth_client: &'a SupabaseAuthClient,
    discord_client: &'a DiscordClient,
}

impl<'a> AuthGuard<'a> {
    pub fn new(auth_client: &'a SupabaseAuthClient, discord_client: &'a DiscordClient) -> Self {
        Self {
            auth_client,
            discord_client,
        }
    }

    /// Runs every stage of the gate for a guild-scoped request.
    ///
    /// # Returns
    /// - `Ok(Caller)` - Caller administers `guild_id`
    /// - `Err(AuthError)` - First stage that failed
    pub async fn authorize(&self, headers: &HeaderMap, guild_id: &str) -> Result<Caller, AuthError> {
        let caller = self.authenticate(headers).await?;

        self.require_guild_admin(&caller, guild_id).await?;

        Ok(caller)
    }

    /// Runs stages 1-4: session, Discord token and owner ID resolution.
    ///
    /// # Returns
    /// - `Ok(Caller)` - Caller identity resolved
    /// - `Err(AuthError::Unauthorized)` - Missing or rejected session token
    /// - `Err(AuthError::MissingDiscordToken)` - No `x-discord-token` header
    /// - `Err(AuthError::MissingOwnerId)` - No numeric Discord ID could be resolved
    pub async fn authenticate(&self, headers: &HeaderMap) -> Result<Caller, AuthError> {
        let Some(access_token) = bearer_token(headers) else {
            return Err(AuthError::Unauthorized);
        };

        let user = match self.auth_client.get_user(access_token).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(AuthError::Unauthorized),
            Err(e) => {
                tracing::debug!("Session validation failed: {}", e);
                return Err(AuthError::Unauthorized);
            }
        };

        let Some(discord_token) = discord_token(headers) else {
            return Err(AuthError::MissingDiscordToken);
        };

        let live_id = match self.discord_client.current_user_id(discord_token).await {
            Ok(id) => id,
            Err(e) => {
                tracing::debug!("Discord identity lookup failed for user {}: {}", user.id, e);
                None
            }
        };
        let session_owner_id = user.metadata_owner_id();

        let Some(owner_id) = live_id.or_else(|| session_owner_id.clone()) else {
            return Err(AuthError::MissingOwnerId);
        };

        Ok(Caller {
            owner_id,
            session_owner_id,
            discord_token: discord_token.to_string(),
        })
    }

    /// Runs stage 5: the caller must hold the administrator bit in `guild_id`.
    ///
    /// Fails closed: a Discord error is indistinguishable from a missing permission.
    pub async fn require_guild_admin(&self, caller: &Caller, guild_id: &str) -> Result<(), AuthError> {
        let guilds = match self
            .discord_client
            .current_user_guilds(&caller.discord_token)
            .await
        {
            Ok(guilds) => guilds,
            Err(e) => {
                tracing::debug!("Discord guild lookup failed for {}: {}", caller.owner_id, e);
                return Err(AuthError::Forbidden);
            }
        };

        let is_admin = guilds
            .iter()
            .any(|guild| guild.id == guild_id && guild.is_admin());

        if !is_admin {
            tracing::debug!(
                "User {} denied access to guild {}",
                caller.owner_id,
                guild_id
            );
            return Err(AuthError::Forbidden);
        }

        Ok(())
    }
}

/// Extracts the session token from `Authorization: Bearer <token>`.
///
/// The prefix is case-sensitive and an empty token counts as absent.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
        .filter(|token| !token.is_empty())
}

/// Extracts the Discord OAuth token from `x-discord-token`.
pub fn discord_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(DISCORD_TOKEN_HEADER)?
        .to_str()
        .ok()
        .filter(|token| !token.is_empty())
}
