//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for each table and convert entity models into
//! domain models at the boundary. All database reads and writes go through them.

pub mod exploiter_event;
pub mod exploiter_stats;
pub mod guild_config;
