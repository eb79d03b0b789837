use crate::server::data::guild_config::GuildConfigRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find;
mod find_whitelist;
mod upsert_whitelist;
