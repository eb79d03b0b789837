use crate::server::data::{
    exploiter_event::ExploiterEventRepository, exploiter_stats::ExploiterStatsRepository,
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_since;
mod find_by_guild_id;
