use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Outcome of a failed authorization gate stage.
///
/// Each variant maps to a fixed error code. Variants intentionally carry no detail so
/// responses never reveal why a guild check failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No `Bearer` token, or the auth provider rejected it.
    #[error("Session token missing or rejected by auth provider")]
    Unauthorized,

    /// Session is valid but the `x-discord-token` header is absent.
    #[error("Request is missing the x-discord-token header")]
    MissingDiscordToken,

    /// Neither Discord nor the session metadata yielded a numeric Discord ID.
    #[error("Could not resolve a Discord ID for the caller")]
    MissingOwnerId,

    /// Caller does not administer the guild, or the check could not be completed.
    #[error("Caller is not an administrator of the requested guild")]
    Forbidden,
}

impl AuthError {
    /// Wire error code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::MissingDiscordToken => "missing_discord_token",
            Self::MissingOwnerId => "missing_owner_id",
            Self::Forbidden => "forbidden",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MissingDiscordToken | Self::MissingOwnerId => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

/// Converts authorization failures into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - `unauthorized`
/// - 400 Bad Request - `missing_discord_token`, `missing_owner_id`
/// - 403 Forbidden - `forbidden`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorDto::new(self.code()))).into_response()
    }
}
