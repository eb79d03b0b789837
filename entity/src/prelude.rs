pub use super::exploiter_event::Entity as ExploiterEvent;
pub use super::exploiter_stats::Entity as ExploiterStats;
pub use super::guild_config::Entity as GuildConfig;
