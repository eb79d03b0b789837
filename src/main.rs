mod model;
mod server;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::server::{
    client::{discord::DiscordClient, supabase::SupabaseAuthClient},
    config::Config,
    error::AppError,
    router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let auth_client = SupabaseAuthClient::new(
        http_client.clone(),
        config.supabase_url.clone(),
        config.supabase_service_key.clone(),
    );
    let discord_client = DiscordClient::new(http_client, config.discord_api_url.clone());

    let app = router::router()
        .with_state(AppState::new(db, auth_client, discord_client))
        .layer(startup::cors_layer(&config))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
