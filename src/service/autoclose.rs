use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{data::ticket::TicketRepository, error::AppError, model::ticket::Ticket};

/// Inactivity warnings for idle tickets.
pub struct AutocloseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AutocloseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Tickets idle for longer than their guild's warning interval that have not
    /// been warned since their last response.
    pub async fn due_warnings(&self, now: DateTime<Utc>) -> Result<Vec<Ticket>, AppError> {
        Ok(TicketRepository::new(self.db).get_needing_warning(now).await?)
    }

    pub async fn mark_warned(&self, channel_id: u64) -> Result<(), AppError> {
        Ok(TicketRepository::new(self.db).mark_notified(channel_id).await?)
    }
}
