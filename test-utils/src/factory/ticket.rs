//! Ticket factory for creating test ticket entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tickets.
///
/// The owning guild configuration must already exist.
///
/// # Example
///
/// ```rust,ignore
/// let ticket = TicketFactory::new(&db, guild.guild_id)
///     .anonymous(true)
///     .build()
///     .await?;
/// ```
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    channel_id: i64,
    guild_id: i64,
    staff_note_thread: Option<i64>,
    anonymous: bool,
    last_response: DateTime<Utc>,
    notified: bool,
}

impl<'a> TicketFactory<'a> {
    /// Creates a new TicketFactory with default values.
    ///
    /// Defaults:
    /// - channel_id: auto-incremented unique value
    /// - staff_note_thread: `None`
    /// - anonymous: `false`
    /// - last_response: now
    /// - notified: `false`
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        Self {
            db,
            channel_id: next_id(),
            guild_id,
            staff_note_thread: None,
            anonymous: false,
            last_response: Utc::now(),
            notified: false,
        }
    }

    pub fn channel_id(mut self, channel_id: i64) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn staff_note_thread(mut self, thread_id: Option<i64>) -> Self {
        self.staff_note_thread = thread_id;
        self
    }

    pub fn anonymous(mut self, anonymous: bool) -> Self {
        self.anonymous = anonymous;
        self
    }

    pub fn last_response(mut self, last_response: DateTime<Utc>) -> Self {
        self.last_response = last_response;
        self
    }

    pub fn notified(mut self, notified: bool) -> Self {
        self.notified = notified;
        self
    }

    /// Builds and inserts the ticket entity into the database.
    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        entity::ticket::ActiveModel {
            channel_id: ActiveValue::Set(self.channel_id),
            guild_id: ActiveValue::Set(self.guild_id),
            staff_note_thread: ActiveValue::Set(self.staff_note_thread),
            anonymous: ActiveValue::Set(self.anonymous),
            last_response: ActiveValue::Set(self.last_response),
            notified: ActiveValue::Set(self.notified),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a ticket with default values in the given guild.
pub async fn create_ticket(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, guild_id).build().await
}
