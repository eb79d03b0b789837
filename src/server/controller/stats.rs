use axum::{
    extract::{Path, RawQuery, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        stats::{AllTimeStatsDto, RangeStatsDto, StatsQueryDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::stats::StatsRange,
        service::stats::StatsService, state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Get exploiter statistics for a guild.
///
/// Without `range`, returns the precomputed all-time counts (zeros when none are
/// recorded). With `range`, counts ban, safe and all events created within the window;
/// an unrecognised range falls back to `1h`.
///
/// # Access Control
/// - Caller must hold the administrator permission in `guild_id`
/// - If the guild has stored configurations, one of them must belong to the caller
///
/// # Returns
/// - `200 OK` - `AllTimeStatsDto` or `RangeStatsDto`
/// - `400 Bad Request` - `missing_discord_token` or `missing_owner_id`
/// - `401 Unauthorized` - Missing or invalid session token
/// - `403 Forbidden` - Caller does not administer or own the guild
/// - `500 Internal Server Error` - `stats_failed`
#[utoipa::path(
    get,
    path = "/api/guild-stats/{guild_id}",
    tag = STATS_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID"),
        StatsQueryDto
    ),
    responses(
        (status = 200, description = "All-time counts, or windowed counts when `range` is set", body = AllTimeStatsDto),
        (status = 400, description = "Discord token or owner ID missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 403, description = "Caller does not administer or own the guild", body = ErrorDto),
        (status = 500, description = "Stats query failed", body = ErrorDto)
    ),
    security(("bearer" = [], "discord_token" = [])),
)]
pub async fn get_guild_stats(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let caller = AuthGuard::new(&state.auth_client, &state.discord_client)
        .authorize(&headers, &guild_id)
        .await?;

    let service = StatsService::new(&state.db);

    service.ensure_owner(&guild_id, &caller).await?;

    let Some(range) = range_param(query.as_deref()) else {
        let counts = service.all_time(&guild_id).await?;

        return Ok(Json(AllTimeStatsDto {
            counts: counts.into_dto(),
        })
        .into_response());
    };

    let range = StatsRange::parse(&range);
    let counts = service.in_range(&guild_id, range, Utc::now()).await?;

    Ok(Json(RangeStatsDto {
        range: range.as_str().to_string(),
        counts: counts.into_dto(),
    })
    .into_response())
}

/// Picks the first `range` value from a raw query string.
///
/// Read after the gate so a malformed query can never preempt an auth error.
fn range_param(query: Option<&str>) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "range")
        .map(|(_, value)| value.into_owned())
}
