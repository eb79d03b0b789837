use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        guild::{GuildDto, GuildListDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::guild_config::AdminGuild,
        service::guild::GuildService, state::AppState,
    },
};

/// Tag for grouping guild discovery endpoints in OpenAPI documentation
pub static GUILD_TAG: &str = "guild";

/// List the guilds the caller administers.
///
/// Fetches the caller's guilds from Discord, keeps those where the caller holds the
/// administrator permission, and merges each with the caller's stored configuration.
/// Guilds without a configuration are returned with defaults.
///
/// # Access Control
/// - Session and Discord token required; no per-guild check since the list itself is
///   filtered to administered guilds
///
/// # Returns
/// - `200 OK` - Administered guilds in Discord's order
/// - `400 Bad Request` - `missing_discord_token` or `missing_owner_id`
/// - `401 Unauthorized` - Missing or invalid session token
/// - `502 Bad Gateway` - Discord guild list could not be fetched
#[utoipa::path(
    get,
    path = "/api/guilds",
    tag = GUILD_TAG,
    responses(
        (status = 200, description = "Administered guilds merged with configuration", body = GuildListDto),
        (status = 400, description = "Discord token or owner ID missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 502, description = "Discord guild list unavailable", body = ErrorDto)
    ),
    security(("bearer" = [], "discord_token" = [])),
)]
pub async fn get_guilds(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.auth_client, &state.discord_client)
        .authenticate(&headers)
        .await?;

    let service = GuildService::new(&state.db, &state.discord_client);

    let guilds: Vec<GuildDto> = service
        .list_admin_guilds(&caller)
        .await?
        .into_iter()
        .map(AdminGuild::into_dto)
        .collect();

    Ok(Json(GuildListDto { guilds }))
}
