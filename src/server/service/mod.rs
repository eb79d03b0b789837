//! Business logic between controllers and repositories.
//!
//! Services take already-authorized callers and identifiers, coordinate repository
//! calls and upstream requests, and map failures onto the request-specific
//! `AppError` variants.

pub mod guild;
pub mod guild_config;
pub mod stats;
