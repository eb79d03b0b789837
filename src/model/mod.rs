//! Wire DTOs returned by and accepted from the HTTP API.
//!
//! Field names mirror the JSON exactly, since the front-end consumes these shapes
//! directly.

pub mod api;
pub mod guild;
pub mod guild_config;
pub mod stats;
