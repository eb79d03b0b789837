//! Request guards applied by controllers before touching the database.

pub mod auth;
