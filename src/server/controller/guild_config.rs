use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        guild_config::{GuildConfigResponseDto, WhitelistDto, WhitelistEntryDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::guild_config::GuildConfigService,
        state::AppState,
    },
};

/// Tag for grouping guild configuration endpoints in OpenAPI documentation
pub static GUILD_CONFIG_TAG: &str = "guild-config";

/// Get the caller's configuration for a guild.
///
/// Returns defaults when the caller has not configured the guild yet.
///
/// # Access Control
/// - Caller must hold the administrator permission in `guild_id`
///
/// # Returns
/// - `200 OK` - Stored configuration or defaults
/// - `400 Bad Request` - `missing_discord_token` or `missing_owner_id`
/// - `401 Unauthorized` - Missing or invalid session token
/// - `403 Forbidden` - Caller does not administer the guild
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guild-config/{guild_id}",
    tag = GUILD_CONFIG_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild configuration", body = GuildConfigResponseDto),
        (status = 400, description = "Discord token or owner ID missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 403, description = "Caller does not administer the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [], "discord_token" = [])),
)]
pub async fn get_guild_config(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.auth_client, &state.discord_client)
        .authorize(&headers, &guild_id)
        .await?;

    let service = GuildConfigService::new(&state.db);

    let config = service.get(&guild_id, &caller.owner_id).await?;

    Ok(Json(GuildConfigResponseDto {
        config: config.into_dto(),
    }))
}

/// Add an entry to the caller's whitelist for a guild.
///
/// The entry is trimmed and the resulting list is deduplicated, so adding an entry
/// twice has no further effect. Creates the configuration row if needed.
///
/// # Access Control
/// - Caller must hold the administrator permission in `guild_id`
///
/// # Returns
/// - `200 OK` - Whitelist after the update
/// - `400 Bad Request` - `missing_entry`, `missing_discord_token` or `missing_owner_id`
/// - `401 Unauthorized` - Missing or invalid session token
/// - `403 Forbidden` - Caller does not administer the guild
/// - `500 Internal Server Error` - `update_failed`
#[utoipa::path(
    post,
    path = "/api/guild-config/{guild_id}",
    tag = GUILD_CONFIG_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = WhitelistEntryDto,
    responses(
        (status = 200, description = "Updated whitelist", body = WhitelistDto),
        (status = 400, description = "Entry, Discord token or owner ID missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 403, description = "Caller does not administer the guild", body = ErrorDto),
        (status = 500, description = "Update failed", body = ErrorDto)
    ),
    security(("bearer" = [], "discord_token" = [])),
)]
pub async fn add_whitelist_entry(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.auth_client, &state.discord_client)
        .authorize(&headers, &guild_id)
        .await?;

    let service = GuildConfigService::new(&state.db);

    let entry = parse_entry(&body);
    let whitelist = service
        .add_entry(&guild_id, &caller.owner_id, entry.as_deref())
        .await?;

    Ok(Json(WhitelistDto { whitelist }))
}

/// Remove an entry from the caller's whitelist for a guild.
///
/// Removing an entry that is not present still succeeds and returns the unchanged
/// list.
///
/// # Access Control
/// - Caller must hold the administrator permission in `guild_id`
///
/// # Returns
/// - `200 OK` - Whitelist after the update
/// - `400 Bad Request` - `missing_entry`, `missing_discord_token` or `missing_owner_id`
/// - `401 Unauthorized` - Missing or invalid session token
/// - `403 Forbidden` - Caller does not administer the guild
/// - `500 Internal Server Error` - `update_failed`
#[utoipa::path(
    delete,
    path = "/api/guild-config/{guild_id}",
    tag = GUILD_CONFIG_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = WhitelistEntryDto,
    responses(
        (status = 200, description = "Updated whitelist", body = WhitelistDto),
        (status = 400, description = "Entry, Discord token or owner ID missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 403, description = "Caller does not administer the guild", body = ErrorDto),
        (status = 500, description = "Update failed", body = ErrorDto)
    ),
    security(("bearer" = [], "discord_token" = [])),
)]
pub async fn remove_whitelist_entry(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.auth_client, &state.discord_client)
        .authorize(&headers, &guild_id)
        .await?;

    let service = GuildConfigService::new(&state.db);

    let entry = parse_entry(&body);
    let whitelist = service
        .remove_entry(&guild_id, &caller.owner_id, entry.as_deref())
        .await?;

    Ok(Json(WhitelistDto { whitelist }))
}

/// Reads `entry` from a JSON body, treating any malformed body as having no entry.
fn parse_entry(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<WhitelistEntryDto>(body)
        .ok()
        .and_then(|payload| payload.entry)
}
