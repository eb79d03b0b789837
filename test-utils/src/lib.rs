//! Guildboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the guildboard
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories for seeding rows, and a stub upstream server that stands in for
//! the Supabase auth endpoint and Discord's REST API.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **UpstreamStub**: Local HTTP server answering auth and Discord requests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GuildConfig;
//!
//! #[tokio::test]
//! async fn test_config_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GuildConfig)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod discord;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod upstream;
