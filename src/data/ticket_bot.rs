use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::role_list::ToggleOutcome;

/// Repository for the users whose channel creations mark tickets.
pub struct TicketBotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketBotRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers the user as a ticket bot, or unregisters it if already present.
    ///
    /// The guild configuration must exist.
    pub async fn toggle(&self, guild_id: u64, user_id: u64) -> Result<ToggleOutcome, DbErr> {
        let key = (guild_id as i64, user_id as i64);

        if let Some(existing) = entity::prelude::TicketBot::find_by_id(key).one(self.db).await? {
            let active: entity::ticket_bot::ActiveModel = existing.into();
            active.delete(self.db).await?;
            return Ok(ToggleOutcome::Removed);
        }

        entity::ticket_bot::ActiveModel {
            guild_id: ActiveValue::Set(key.0),
            user_id: ActiveValue::Set(key.1),
        }
        .insert(self.db)
        .await?;

        Ok(ToggleOutcome::Added)
    }

    pub async fn is_ticket_bot(&self, guild_id: u64, user_id: u64) -> Result<bool, DbErr> {
        let found = entity::prelude::TicketBot::find_by_id((guild_id as i64, user_id as i64))
            .one(self.db)
            .await?;

        Ok(found.is_some())
    }
}
