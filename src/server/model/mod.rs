//! Server-side domain models.
//!
//! Domain models are converted from entity models or upstream payloads at the repository
//! and client boundaries, and transformed to DTOs at the controller boundary.

pub mod discord;
pub mod guild_config;
pub mod session;
pub mod stats;
