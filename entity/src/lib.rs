pub mod prelude;

pub mod exploiter_event;
pub mod exploiter_stats;
pub mod guild_config;
