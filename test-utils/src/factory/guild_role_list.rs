//! Factory for role list entries (staff, observers, community, community ping).

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a role to one of a guild's role lists.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Owning guild (must exist)
/// - `list` - List name as stored: `staff`, `observers`, `community` or `community_ping`
/// - `role_id` - Discord role ID
pub async fn add_role(
    db: &DatabaseConnection,
    guild_id: i64,
    list: &str,
    role_id: i64,
) -> Result<entity::guild_role_list::Model, DbErr> {
    entity::guild_role_list::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        list: ActiveValue::Set(list.to_string()),
        role_id: ActiveValue::Set(role_id),
    }
    .insert(db)
    .await
}
