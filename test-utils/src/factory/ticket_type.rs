//! Ticket type factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating ticket types.
///
/// Defaults allow every open step (`community_ping`, `community_access`,
/// `strip_buttons` are `true`) and do not ignore matching channels.
pub struct TicketTypeFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::ticket_type::Model,
}

impl<'a> TicketTypeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: i64, prefix: impl Into<String>) -> Self {
        Self {
            db,
            entity: entity::ticket_type::Model {
                guild_id,
                prefix: prefix.into(),
                community_ping: true,
                community_access: true,
                strip_buttons: true,
                ignore: false,
            },
        }
    }

    pub fn community_ping(mut self, value: bool) -> Self {
        self.entity.community_ping = value;
        self
    }

    pub fn community_access(mut self, value: bool) -> Self {
        self.entity.community_access = value;
        self
    }

    pub fn strip_buttons(mut self, value: bool) -> Self {
        self.entity.strip_buttons = value;
        self
    }

    pub fn ignore(mut self, value: bool) -> Self {
        self.entity.ignore = value;
        self
    }

    /// Builds and inserts the ticket type into the database.
    pub async fn build(self) -> Result<entity::ticket_type::Model, DbErr> {
        entity::ticket_type::ActiveModel {
            guild_id: ActiveValue::Set(self.entity.guild_id),
            prefix: ActiveValue::Set(self.entity.prefix),
            community_ping: ActiveValue::Set(self.entity.community_ping),
            community_access: ActiveValue::Set(self.entity.community_access),
            strip_buttons: ActiveValue::Set(self.entity.strip_buttons),
            ignore: ActiveValue::Set(self.entity.ignore),
        }
        .insert(self.db)
        .await
    }
}
