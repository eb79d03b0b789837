use std::net::SocketAddr;

use axum::http::HeaderValue;
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_API_URL: &str = "https://discord.com/api";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub supabase_url: String,
    pub supabase_service_key: String,

    pub discord_api_url: String,

    pub bind_addr: SocketAddr,
    /// `None` allows any origin.
    pub cors_allowed_origin: Option<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let supabase_url = required("SUPABASE_URL")
            .or_else(|_| required("PUBLIC_SUPABASE_URL"))
            .map_err(|_| ConfigError::MissingEnvVar("SUPABASE_URL".to_string()))?;
        let discord_api_url =
            std::env::var("DISCORD_API_URL").unwrap_or_else(|_| DISCORD_API_URL.to_string());
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            supabase_url: base_url("SUPABASE_URL", &supabase_url)?,
            supabase_service_key: required("SUPABASE_SERVICE_KEY")?,
            discord_api_url: base_url("DISCORD_API_URL", &discord_api_url)?,
            bind_addr: bind_addr.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    name: "BIND_ADDR".to_string(),
                    reason: e.to_string(),
                }
            })?,
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .map(|origin| {
                    HeaderValue::from_str(&origin).map_err(|e| ConfigError::InvalidValue {
                        name: "CORS_ALLOWED_ORIGIN".to_string(),
                        reason: e.to_string(),
                    })
                })
                .transpose()?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Validates an absolute http(s) URL and strips any trailing slash so paths can be
/// appended with `format!`.
fn base_url(name: &str, value: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        name: name.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }

    Ok(value.trim_end_matches('/').to_string())
}
