use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope carrying one of the fixed error codes.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct ErrorDto {
    /// Machine-readable error code such as `unauthorized` or `forbidden`.
    pub error: String,
}

impl ErrorDto {
    pub fn new(code: &str) -> Self {
        Self {
            error: code.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
