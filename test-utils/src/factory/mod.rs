//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let config = factory::create_guild_config(&db, "42", "111").await?;
//!
//!     // Customize through the builder
//!     let config = factory::guild_config::GuildConfigFactory::new(&db)
//!         .guild_id("42")
//!         .owner_id("111")
//!         .whitelist(["alpha", "beta"])
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild_config` - Create guild configuration rows
//! - `exploiter_stats` - Create precomputed all-time count rows
//! - `exploiter_event` - Create individual moderation event rows
//! - `helpers` - Unique id generation shared by all factories

pub mod exploiter_event;
pub mod exploiter_stats;
pub mod guild_config;
pub mod helpers;

pub use exploiter_event::create_event_at;
pub use exploiter_stats::create_stats;
pub use guild_config::create_guild_config;
