//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for guild configuration and statistics
//! - Supabase auth client for validating session tokens
//! - Discord client for resolving identity and guild permissions

use sea_orm::DatabaseConnection;

use super::client::{discord::DiscordClient, supabase::SupabaseAuthClient};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - Both clients wrap a `reqwest::Client`, which uses an `Arc` internally
///
/// Tests substitute collaborators by building the state from an in-memory database
/// and clients pointed at a local stub server.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Client for validating `Authorization: Bearer` session tokens.
    pub auth_client: SupabaseAuthClient,

    /// Client for Discord's `/users/@me` and `/users/@me/guilds`.
    pub discord_client: DiscordClient,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `auth_client` - Session validation client
    /// - `discord_client` - Discord REST client
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        auth_client: SupabaseAuthClient,
        discord_client: DiscordClient,
    ) -> Self {
        Self {
            db,
            auth_client,
            discord_client,
        }
    }
}
