//! Ticket repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    model::ticket::{CreateTicketParam, Ticket},
    util::interval,
};

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a ticket, returning the existing row if the channel is already tracked.
    ///
    /// The guild configuration must exist.
    ///
    /// # Arguments
    /// - `param` - Channel, guild, staff notes thread and open time
    ///
    /// # Returns
    /// - `Ok(Ticket)` - Created or existing ticket
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn create(&self, param: CreateTicketParam) -> Result<Ticket, DbErr> {
        if let Some(existing) = self.find_by_channel_id(param.channel_id).await? {
            return Ok(existing);
        }

        let entity = entity::ticket::ActiveModel {
            channel_id: ActiveValue::Set(param.channel_id as i64),
            guild_id: ActiveValue::Set(param.guild_id as i64),
            staff_note_thread: ActiveValue::Set(param.staff_note_thread.map(|id| id as i64)),
            anonymous: ActiveValue::Set(false),
            last_response: ActiveValue::Set(param.opened_at),
            notified: ActiveValue::Set(false),
        }
        .insert(self.db)
        .await?;

        Ok(Ticket::from_entity(entity))
    }

    pub async fn find_by_channel_id(&self, channel_id: u64) -> Result<Option<Ticket>, DbErr> {
        let entity = entity::prelude::Ticket::find_by_id(channel_id as i64)
            .one(self.db)
            .await?;

        Ok(entity.map(Ticket::from_entity))
    }

    /// Deletes a ticket by channel ID.
    ///
    /// # Returns
    /// - `Ok(true)` - A ticket was deleted
    /// - `Ok(false)` - The channel was not a ticket
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, channel_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::Ticket::delete_by_id(channel_id as i64)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Flips a ticket's anonymous mode.
    ///
    /// # Returns
    /// - `Ok(Some(bool))` - The new anonymous state
    /// - `Ok(None)` - The channel is not a ticket
    /// - `Err(DbErr)` - Database error during update
    pub async fn toggle_anonymous(&self, channel_id: u64) -> Result<Option<bool>, DbErr> {
        let Some(entity) = entity::prelude::Ticket::find_by_id(channel_id as i64)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let anonymous = !entity.anonymous;
        let mut active: entity::ticket::ActiveModel = entity.into();
        active.anonymous = ActiveValue::Set(anonymous);
        active.update(self.db).await?;

        Ok(Some(anonymous))
    }

    /// Records a message in the ticket and re-arms the inactivity warning.
    ///
    /// # Returns
    /// - `Ok(true)` - The ticket was updated
    /// - `Ok(false)` - The channel is not a ticket
    /// - `Err(DbErr)` - Database error during update
    pub async fn record_response(&self, channel_id: u64, at: DateTime<Utc>) -> Result<bool, DbErr> {
        let Some(entity) = entity::prelude::Ticket::find_by_id(channel_id as i64)
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let mut active: entity::ticket::ActiveModel = entity.into();
        active.last_response = ActiveValue::Set(at);
        active.notified = ActiveValue::Set(false);
        active.update(self.db).await?;

        Ok(true)
    }

    /// Gets tickets whose guild warning interval has elapsed since the last response
    /// and that have not been warned yet.
    ///
    /// # Arguments
    /// - `now` - Reference time for the interval comparison
    ///
    /// # Returns
    /// - `Ok(Vec<Ticket>)` - Tickets due a warning, across all guilds
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_needing_warning(&self, now: DateTime<Utc>) -> Result<Vec<Ticket>, DbErr> {
        let guilds = entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::WarnAutoclose.is_not_null())
            .all(self.db)
            .await?;

        let mut due = Vec::new();
        for guild in guilds {
            let Some(minutes) = guild.warn_autoclose else {
                continue;
            };
            let Some(cutoff) = interval::before(now, minutes) else {
                tracing::warn!(
                    "Skipping guild {} with out-of-range warning interval of {} minutes",
                    guild.guild_id,
                    minutes
                );
                continue;
            };

            let tickets = entity::prelude::Ticket::find()
                .filter(entity::ticket::Column::GuildId.eq(guild.guild_id))
                .filter(entity::ticket::Column::Notified.eq(false))
                .filter(entity::ticket::Column::LastResponse.lte(cutoff))
                .all(self.db)
                .await?;

            due.extend(tickets.into_iter().map(Ticket::from_entity));
        }

        Ok(due)
    }

    /// Marks a ticket as warned so the sweep skips it until the next response.
    pub async fn mark_notified(&self, channel_id: u64) -> Result<(), DbErr> {
        let Some(entity) = entity::prelude::Ticket::find_by_id(channel_id as i64)
            .one(self.db)
            .await?
        else {
            return Ok(());
        };

        let mut active: entity::ticket::ActiveModel = entity.into();
        active.notified = ActiveValue::Set(true);
        active.update(self.db).await?;

        Ok(())
    }
}
