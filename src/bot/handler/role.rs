use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildId, Role, RoleId};

use crate::service::settings::SettingsService;

/// Forgets a deleted role in every role list and penalty setting.
pub async fn handle_guild_role_delete(
    db: &DatabaseConnection,
    _ctx: Context,
    guild_id: GuildId,
    removed_role_id: RoleId,
    _removed_role_data_if_in_cache: Option<Role>,
) {
    if let Err(e) = SettingsService::new(db)
        .purge_role(guild_id.get(), removed_role_id.get())
        .await
    {
        tracing::error!(
            "Failed to purge deleted role {} in guild {}: {:?}",
            removed_role_id,
            guild_id,
            e
        );
    }
}
