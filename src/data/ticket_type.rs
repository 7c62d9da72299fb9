//! Ticket type repository.
//!
//! A ticket type is matched by channel-name prefix. Ticket bots usually name their
//! channels `<prefix>-<number>`, so the prefix is enough to tell categories apart.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::{
    role_list::ToggleOutcome,
    ticket_type::{TicketType, ToggleTicketTypeParam},
};

pub struct TicketTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the ticket type, or deletes it if the prefix is already registered.
    ///
    /// The flags in `param` are only used when creating. The guild configuration
    /// must exist.
    pub async fn toggle(&self, param: ToggleTicketTypeParam) -> Result<ToggleOutcome, DbErr> {
        let key = (param.guild_id as i64, param.prefix.clone());

        if let Some(existing) = entity::prelude::TicketType::find_by_id(key.clone())
            .one(self.db)
            .await?
        {
            let active: entity::ticket_type::ActiveModel = existing.into();
            active.delete(self.db).await?;
            return Ok(ToggleOutcome::Removed);
        }

        entity::ticket_type::ActiveModel {
            guild_id: ActiveValue::Set(key.0),
            prefix: ActiveValue::Set(key.1),
            community_ping: ActiveValue::Set(param.community_ping),
            community_access: ActiveValue::Set(param.community_access),
            strip_buttons: ActiveValue::Set(param.strip_buttons),
            ignore: ActiveValue::Set(param.ignore),
        }
        .insert(self.db)
        .await?;

        Ok(ToggleOutcome::Added)
    }

    /// Gets every ticket type in a guild, ordered by prefix.
    pub async fn get_all(&self, guild_id: u64) -> Result<Vec<TicketType>, DbErr> {
        let rows = entity::prelude::TicketType::find()
            .filter(entity::ticket_type::Column::GuildId.eq(guild_id as i64))
            .order_by_asc(entity::ticket_type::Column::Prefix)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(TicketType::from_entity).collect())
    }

    /// Finds the ticket type whose prefix starts the channel name.
    ///
    /// When several prefixes match, the longest one wins.
    pub async fn match_channel(
        &self,
        guild_id: u64,
        channel_name: &str,
    ) -> Result<Option<TicketType>, DbErr> {
        let matched = self
            .get_all(guild_id)
            .await?
            .into_iter()
            .filter(|ticket_type| channel_name.starts_with(&ticket_type.prefix))
            .max_by_key(|ticket_type| ticket_type.prefix.len());

        Ok(matched)
    }
}
