//! Exploiter statistics domain models.

use chrono::{DateTime, Duration, Utc};

use crate::model::stats::{AllTimeCountsDto, RangeCountsDto};

/// Time window for range-limited statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsRange {
    #[default]
    OneHour,
    OneDay,
    SevenDays,
    ThirtyDays,
}

impl StatsRange {
    /// Parses a `range` query value, falling back to one hour for anything
    /// unrecognised.
    pub fn parse(value: &str) -> Self {
        match value {
            "24h" => Self::OneDay,
            "7d" => Self::SevenDays,
            "30d" => Self::ThirtyDays,
            _ => Self::OneHour,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneHour => "1h",
            Self::OneDay => "24h",
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
        }
    }

    pub fn window_ms(&self) -> i64 {
        const HOUR_MS: i64 = 60 * 60 * 1000;

        match self {
            Self::OneHour => HOUR_MS,
            Self::OneDay => 24 * HOUR_MS,
            Self::SevenDays => 7 * 24 * HOUR_MS,
            Self::ThirtyDays => 30 * 24 * HOUR_MS,
        }
    }

    /// Earliest `created_at` still counted: events at or after the cutoff are
    /// included.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::milliseconds(self.window_ms())
    }
}

/// Precomputed all-time counts for a guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllTimeCounts {
    pub exploiters: u64,
    pub safe: u64,
}

impl AllTimeCounts {
    pub fn from_entity(entity: entity::exploiter_stats::Model) -> Self {
        Self {
            exploiters: non_negative(entity.exploiters),
            safe: non_negative(entity.safe),
        }
    }

    pub fn total(&self) -> u64 {
        self.exploiters + self.safe
    }

    pub fn into_dto(self) -> AllTimeCountsDto {
        AllTimeCountsDto {
            exploiters: self.exploiters,
            safe: self.safe,
            total: self.total(),
        }
    }
}

fn non_negative(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}

/// Event counts within a time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeCounts {
    pub ban: u64,
    pub safe: u64,
    /// Every event in the window, including actions other than ban and safe.
    pub total: u64,
}

impl RangeCounts {
    pub fn into_dto(self) -> RangeCountsDto {
        RangeCountsDto {
            ban: self.ban,
            safe: self.safe,
            total: self.total,
        }
    }
}
