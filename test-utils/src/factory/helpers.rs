//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values start well above zero so they never collide with hand-written IDs
/// like `1` or `2` used in individual tests.
///
/// # Returns
/// - `i64` - Next unique snowflake-like value
pub fn next_id() -> i64 {
    1_000_000 + COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst) as i64
}

/// Creates a guild configuration and a ticket inside it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((guild, ticket))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_guild_with_ticket(
    db: &DatabaseConnection,
) -> Result<(entity::guild_config::Model, entity::ticket::Model), DbErr> {
    let guild = crate::factory::guild_config::create_guild(db).await?;
    let ticket = crate::factory::ticket::create_ticket(db, guild.guild_id).await?;

    Ok((guild, ticket))
}
