//! In-memory entity fixtures.
//!
//! Fixtures build entity models without touching a database. Use them to unit test
//! conversions at the repository boundary.

pub mod guild_config;
