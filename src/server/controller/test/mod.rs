use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{
    builder::TestBuilder,
    discord, factory,
    upstream::{self, UpstreamConfig, UpstreamStub, DISCORD_TOKEN, OWNER_ID, SESSION_TOKEN},
};
use tower::ServiceExt;

use crate::server::{
    client::{discord::DiscordClient, supabase::SupabaseAuthClient},
    middleware::auth::DISCORD_TOKEN_HEADER,
    router::router,
    state::AppState,
};


/// Full application router backed by an in-memory database and a stub upstream.
struct TestApp {
    stub: UpstreamStub,
    db: DatabaseConnection,
    router: Router,
}

impl TestApp {
    async fn start(config: UpstreamConfig) -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.unwrap();

        let stub = UpstreamStub::start(config).await.unwrap();
        let http_client = reqwest::Client::new();
        let state = AppState::new(
            db.clone(),
            SupabaseAuthClient::new(
                http_client.clone(),
                stub.base_url.clone(),
                "service-key".to_string(),
            ),
            DiscordClient::new(http_client, stub.base_url.clone()),
        );

        Self {
            stub,
            db,
            router: router().with_state(state),
        }
    }

    /// App where the caller administers guild `42`.
    async fn admin_of_42() -> Self {
        Self::start(
            UpstreamConfig::new().with_guilds(vec![discord::partial_guild(
                "42",
                "Target",
                discord::ADMIN,
            )]),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }
}

/// Request carrying both valid tokens.
fn authed(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    request(method, uri, Some(SESSION_TOKEN), Some(DISCORD_TOKEN), body)
}

fn request(
    method: Method,
    uri: &str,
    session: Option<&str>,
    discord: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(session) = session {
        builder = builder.header("authorization", format!("Bearer {}", session));
    }
    if let Some(discord) = discord {
        builder = builder.header(DISCORD_TOKEN_HEADER, discord);
    }

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
