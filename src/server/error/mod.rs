//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. Every response body is an `ErrorDto`
//! carrying one code from a fixed vocabulary; underlying causes are only logged.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. `AuthError` handles its own response mapping,
/// the request-specific variants map to their own codes, and everything else becomes a
/// generic `internal_error`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authorization gate failure.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Socket or listener error while starting the server.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Discord's guild list could not be fetched or decoded.
    ///
    /// Results in 502 Bad Gateway with `discord_fetch_failed`.
    #[error("Failed to fetch guilds from Discord: {0}")]
    DiscordFetchFailed(#[source] reqwest::Error),

    /// Whitelist edit request without a usable entry.
    ///
    /// Results in 400 Bad Request with `missing_entry`.
    #[error("Request body has no non-empty entry")]
    MissingEntry,

    /// Reading or upserting a guild configuration failed during a whitelist edit.
    ///
    /// Results in 500 Internal Server Error with `update_failed`.
    #[error("Failed to update guild config: {0}")]
    UpdateFailed(#[source] sea_orm::DbErr),

    /// Reading exploiter statistics failed.
    ///
    /// Results in 500 Internal Server Error with `stats_failed`.
    #[error("Failed to read guild stats: {0}")]
    StatsFailed(#[source] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 400 Bad Request - `missing_entry`
/// - 502 Bad Gateway - `discord_fetch_failed`
/// - 500 Internal Server Error - `update_failed`, `stats_failed`, or `internal_error`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::MissingEntry => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new("missing_entry"))).into_response()
            }
            Self::DiscordFetchFailed(err) => {
                tracing::warn!("Discord guild fetch failed: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto::new("discord_fetch_failed")),
                )
                    .into_response()
            }
            Self::UpdateFailed(err) => {
                tracing::error!("Guild config update failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("update_failed")),
                )
                    .into_response()
            }
            Self::StatsFailed(err) => {
                tracing::error!("Guild stats query failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("stats_failed")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns the generic `internal_error` code to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("internal_error")),
        )
            .into_response()
    }
}
