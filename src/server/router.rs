use axum::Router;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        guild::{__path_get_guilds, get_guilds},
        guild_config::{
            __path_add_whitelist_entry, __path_get_guild_config, __path_remove_whitelist_entry,
            add_whitelist_entry, get_guild_config, remove_whitelist_entry,
        },
        health::{__path_health, health},
        stats::{__path_get_guild_stats, get_guild_stats},
    },
    middleware::auth::DISCORD_TOKEN_HEADER,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "guildboard", description = "Guild moderation dashboard API"),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Service health"),
        (name = "guild", description = "Administered guild discovery"),
        (name = "guild-config", description = "Per-owner guild configuration"),
        (name = "stats", description = "Exploiter statistics"),
    )
)]
struct ApiDoc;

/// Registers the two credentials every guarded endpoint expects.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
        components.add_security_scheme(
            "discord_token",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(DISCORD_TOKEN_HEADER))),
        );
    }
}

/// Builds the API router and serves its OpenAPI document through Swagger UI at
/// `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health))
        .routes(routes!(get_guilds))
        .routes(routes!(
            get_guild_config,
            add_whitelist_entry,
            remove_whitelist_entry
        ))
        .routes(routes!(get_guild_stats))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
