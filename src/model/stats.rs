use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters accepted by the stats endpoint.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct StatsQueryDto {
    /// One of `1h`, `24h`, `7d`, `30d`. Omit for all-time counts; anything else means `1h`.
    pub range: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct AllTimeCountsDto {
    pub exploiters: u64,
    pub safe: u64,
    pub total: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct AllTimeStatsDto {
    pub counts: AllTimeCountsDto,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct RangeCountsDto {
    pub ban: u64,
    pub safe: u64,
    pub total: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct RangeStatsDto {
    pub range: String,
    pub counts: RangeCountsDto,
}
