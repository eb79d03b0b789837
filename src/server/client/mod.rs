//! HTTP clients for the external collaborators: the Supabase auth endpoint and
//! Discord's REST API.
//!
//! Both wrap the shared `reqwest::Client` from `AppState` and are cheap to clone.

pub mod discord;
pub mod supabase;
