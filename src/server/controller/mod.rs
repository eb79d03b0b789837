//! HTTP request handlers.
//!
//! Every handler except health runs the authenticated-admin gate before touching the
//! database, then delegates to a service and converts the domain result into a DTO.

pub mod guild;
pub mod guild_config;
pub mod health;
pub mod stats;

#[cfg(test)]
mod test;
