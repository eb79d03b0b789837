//! HTTP API backend for the guild moderation dashboard.
//!
//! Serves guild discovery, per-owner guild configuration and exploiter statistics to
//! the dashboard front-end. Every guarded endpoint validates a Supabase session and a
//! Discord OAuth token and checks the caller's Discord administrator permission before
//! touching the database.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, gate invocation and DTO conversion
//! - **Service Layer** (`service/`) - Business logic between controllers and the data layer
//! - **Data Layer** (`data/`) - SeaORM repositories and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and upstream payload types
//! - **Client Layer** (`client/`) - Supabase auth and Discord REST clients
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - The authenticated-admin gate
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool and upstream clients)
//! - **Startup** (`startup`) - Tracing, database, HTTP client and CORS setup
//! - **Router** (`router`) - Route table and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** dispatches the request to a controller
//! 2. **Controller** runs the gate from `middleware::auth`
//! 3. **Service** executes the operation against repositories and upstream clients
//! 4. **Controller** converts the domain result into a DTO, or `AppError` into an
//!    `{"error": code}` body

pub mod client;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
