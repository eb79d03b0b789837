//! Exploiter stats factory for creating precomputed all-time count rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an all-time stats row for a guild.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID as string
/// - `exploiters` - Number of exploiters recorded
/// - `safe` - Number of accounts marked safe
///
/// # Returns
/// - `Ok(entity::exploiter_stats::Model)` - Created stats entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_stats(
    db: &DatabaseConnection,
    guild_id: &str,
    exploiters: i64,
    safe: i64,
) -> Result<entity::exploiter_stats::Model, DbErr> {
    entity::exploiter_stats::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        exploiters: ActiveValue::Set(exploiters),
        safe: ActiveValue::Set(safe),
    }
    .insert(db)
    .await
}
