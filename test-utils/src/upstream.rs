//! Stub upstream server standing in for Supabase auth and Discord's REST API.
//!
//! The stub binds an ephemeral local port and serves:
//! - `GET /auth/v1/user` - accepts only `Authorization: Bearer session-token` with an `apikey`
//! - `GET /users/@me` - accepts only `Authorization: Bearer discord-token`
//! - `GET /users/@me/guilds` - same token check
//!
//! Every request is counted, letting tests assert that a handler short-circuited
//! before making any upstream call.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::{discord, error::TestError};

/// Session token accepted by the stub auth endpoint.
pub const SESSION_TOKEN: &str = "session-token";

/// Discord OAuth token accepted by the stub Discord endpoints.
pub const DISCORD_TOKEN: &str = "discord-token";

/// Discord user ID returned by the default configuration.
pub const OWNER_ID: &str = "111";

/// Canned responses served by the stub.
#[derive(Clone)]
pub struct UpstreamConfig {
    /// Body returned by `/auth/v1/user` for a valid session token.
    pub session_user: Value,
    /// Body returned by `/users/@me`, `None` answers 401.
    pub discord_user: Option<Value>,
    /// Body returned by `/users/@me/guilds`, `None` answers 500.
    pub discord_guilds: Option<Value>,
}

impl UpstreamConfig {
    /// Creates a configuration where the caller resolves to Discord user `111` and
    /// belongs to no guilds.
    pub fn new() -> Self {
        Self {
            session_user: session_user(json!({ "provider_id": OWNER_ID }), json!([])),
            discord_user: Some(discord::current_user(OWNER_ID)),
            discord_guilds: Some(json!([])),
        }
    }

    /// Sets the guild list returned by `/users/@me/guilds`.
    pub fn with_guilds(mut self, guilds: Vec<Value>) -> Self {
        self.discord_guilds = Some(Value::Array(guilds));
        self
    }

    /// Sets the raw body returned by `/users/@me/guilds`.
    pub fn with_raw_guilds(mut self, body: Value) -> Self {
        self.discord_guilds = Some(body);
        self
    }

    /// Makes `/users/@me/guilds` answer 500.
    pub fn guilds_unavailable(mut self) -> Self {
        self.discord_guilds = None;
        self
    }

    /// Sets the body returned by `/users/@me`.
    pub fn with_discord_user(mut self, user: Value) -> Self {
        self.discord_user = Some(user);
        self
    }

    /// Makes `/users/@me` answer 401.
    pub fn discord_user_unavailable(mut self) -> Self {
        self.discord_user = None;
        self
    }

    /// Sets the body returned by `/auth/v1/user`.
    pub fn with_session_user(mut self, user: Value) -> Self {
        self.session_user = user;
        self
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a Supabase `/auth/v1/user` payload.
///
/// # Arguments
/// - `user_metadata` - Value of the `user_metadata` object
/// - `identities` - Value of the `identities` array
pub fn session_user(user_metadata: Value, identities: Value) -> Value {
    json!({
        "id": "5b0c7f5e-2a9e-4a55-9d1f-0d7d1f6e9b10",
        "aud": "authenticated",
        "role": "authenticated",
        "app_metadata": { "provider": "discord" },
        "user_metadata": user_metadata,
        "identities": identities,
    })
}

struct StubState {
    config: UpstreamConfig,
    hits: AtomicUsize,
}

/// Running stub server.
pub struct UpstreamStub {
    /// Base URL such as `http://127.0.0.1:54321`, without trailing slash.
    pub base_url: String,
    state: Arc<StubState>,
}

impl UpstreamStub {
    /// Binds an ephemeral port and starts serving the configured responses.
    ///
    /// # Returns
    /// - `Ok(UpstreamStub)` - Server is accepting connections
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn start(config: UpstreamConfig) -> Result<Self, TestError> {
        let state = Arc::new(StubState {
            config,
            hits: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route("/auth/v1/user", get(auth_user))
            .route("/users/@me", get(discord_user))
            .route("/users/@me/guilds", get(discord_guilds))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            state,
        })
    }

    /// Number of requests served so far across all routes.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }
}

fn bearer_matches(headers: &HeaderMap, token: &str) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {}", token))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "401: Unauthorized" })),
    )
        .into_response()
}

async fn auth_user(State(stub): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    stub.hits.fetch_add(1, Ordering::SeqCst);

    if headers.get("apikey").is_none() || !bearer_matches(&headers, SESSION_TOKEN) {
        return unauthorized();
    }

    Json(stub.config.session_user.clone()).into_response()
}

async fn discord_user(State(stub): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    stub.hits.fetch_add(1, Ordering::SeqCst);

    if !bearer_matches(&headers, DISCORD_TOKEN) {
        return unauthorized();
    }

    match &stub.config.discord_user {
        Some(user) => Json(user.clone()).into_response(),
        None => unauthorized(),
    }
}

async fn discord_guilds(State(stub): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    stub.hits.fetch_add(1, Ordering::SeqCst);

    if !bearer_matches(&headers, DISCORD_TOKEN) {
        return unauthorized();
    }

    match &stub.config.discord_guilds {
        Some(guilds) => Json(guilds.clone()).into_response(),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "500: Internal Server Error" })),
        )
            .into_response(),
    }
}
