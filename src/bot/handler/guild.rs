//! Guild availability handlers.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild, UnavailableGuild};

use crate::service::settings::SettingsService;

/// Ensures a configuration row exists for every guild the bot is in.
///
/// # Arguments
/// - `db` - Database connection
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `guild` - The guild that became available
/// - `is_new` - Whether the bot just joined the guild
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    if let Err(e) = SettingsService::new(db).ensure_guild(guild.id.get()).await {
        tracing::error!("Failed to load config for guild {}: {:?}", guild.id, e);
        return;
    }

    if is_new == Some(true) {
        tracing::info!("Joined guild {} ({})", guild.name, guild.id);
    } else {
        tracing::debug!("Guild available: {} ({})", guild.name, guild.id);
    }
}

/// Deletes the configuration of a guild the bot was removed from.
///
/// Outages also emit this event with `unavailable` set; configuration is kept
/// in that case.
pub async fn handle_guild_delete(
    db: &DatabaseConnection,
    _ctx: Context,
    incomplete: UnavailableGuild,
    _full: Option<Guild>,
) {
    if incomplete.unavailable {
        tracing::warn!("Guild {} became unavailable", incomplete.id);
        return;
    }

    match SettingsService::new(db).remove_guild(incomplete.id.get()).await {
        Ok(true) => tracing::info!("Removed from guild {}, configuration deleted", incomplete.id),
        Ok(false) => tracing::info!("Removed from guild {}", incomplete.id),
        Err(e) => tracing::error!(
            "Failed to delete configuration for guild {}: {:?}",
            incomplete.id,
            e
        ),
    }
}
