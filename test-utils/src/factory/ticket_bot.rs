//! Factory for registered ticket bots.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Registers a user as a ticket bot in the given guild.
pub async fn create_ticket_bot(
    db: &DatabaseConnection,
    guild_id: i64,
    user_id: i64,
) -> Result<entity::ticket_bot::Model, DbErr> {
    entity::ticket_bot::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await
}
