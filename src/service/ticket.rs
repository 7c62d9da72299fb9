//! Ticket lifecycle decisions.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::GuildChannel;

use crate::{
    data::{
        guild::GuildRepository, role_list::RoleListRepository, ticket::TicketRepository,
        ticket_bot::TicketBotRepository, ticket_type::TicketTypeRepository,
    },
    error::AppError,
    model::{
        role_list::RoleList,
        ticket::{CreateTicketParam, Ticket, TicketOpenPlan},
    },
};

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether channels created by this user are tickets.
    pub async fn is_ticket_bot(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError> {
        Ok(TicketBotRepository::new(self.db)
            .is_ticket_bot(guild_id, user_id)
            .await?)
    }

    /// Checks whether any of the member's roles is a staff role.
    pub async fn is_staff(&self, guild_id: u64, role_ids: &[u64]) -> Result<bool, AppError> {
        Ok(RoleListRepository::new(self.db)
            .contains_any(guild_id, RoleList::Staff, role_ids)
            .await?)
    }

    /// Works out which ticket-open steps apply to a new ticket channel.
    ///
    /// Guild settings enable a step and the matched ticket type can only switch it
    /// off again.
    ///
    /// # Arguments
    /// - `channel` - The channel a ticket bot just created
    ///
    /// # Returns
    /// - `Ok(Some(TicketOpenPlan))` - Steps to run
    /// - `Ok(None)` - The matched ticket type is ignored
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn plan_open(
        &self,
        channel: &GuildChannel,
    ) -> Result<Option<TicketOpenPlan>, AppError> {
        let guild_id = channel.guild_id.get();
        let settings = GuildRepository::new(self.db).get_or_create(guild_id).await?;
        let ticket_type = TicketTypeRepository::new(self.db)
            .match_channel(guild_id, &channel.name)
            .await?;

        if ticket_type.as_ref().is_some_and(|ticket_type| ticket_type.ignore) {
            return Ok(None);
        }

        let community_access = ticket_type.as_ref().map_or(true, |t| t.community_access);
        let community_ping = ticket_type.as_ref().map_or(true, |t| t.community_ping);
        let type_strips = ticket_type.as_ref().map_or(true, |t| t.strip_buttons);

        let roles = RoleListRepository::new(self.db);
        let observers = roles.get_all(guild_id, RoleList::Observers).await?;
        let community_roles = if community_access {
            roles.get_all(guild_id, RoleList::Community).await?
        } else {
            Vec::new()
        };
        let community_pings = if community_ping {
            roles.get_all(guild_id, RoleList::CommunityPing).await?
        } else {
            Vec::new()
        };
        let strip_buttons = settings.strip_buttons && type_strips;

        Ok(Some(TicketOpenPlan {
            settings,
            ticket_type,
            observers,
            community_roles,
            community_pings,
            strip_buttons,
        }))
    }

    /// Persists a newly opened ticket.
    pub async fn open(&self, param: CreateTicketParam) -> Result<Ticket, AppError> {
        Ok(TicketRepository::new(self.db).create(param).await?)
    }

    /// Forgets a ticket whose channel was deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - The channel was a ticket
    /// - `Ok(false)` - The channel was not tracked
    pub async fn close(&self, channel_id: u64) -> Result<bool, AppError> {
        Ok(TicketRepository::new(self.db).delete(channel_id).await?)
    }

    pub async fn find(&self, channel_id: u64) -> Result<Option<Ticket>, AppError> {
        Ok(TicketRepository::new(self.db)
            .find_by_channel_id(channel_id)
            .await?)
    }

    /// Records a message in a ticket, re-arming the inactivity warning.
    pub async fn record_response(
        &self,
        channel_id: u64,
        at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        Ok(TicketRepository::new(self.db)
            .record_response(channel_id, at)
            .await?)
    }

    /// Flips anonymous mode for the ticket in `channel_id`.
    ///
    /// # Returns
    /// - `Ok(bool)` - New anonymous state
    /// - `Err(AppError::NotFound)` - The channel is not a ticket
    pub async fn toggle_anonymous(&self, channel_id: u64) -> Result<bool, AppError> {
        TicketRepository::new(self.db)
            .toggle_anonymous(channel_id)
            .await?
            .ok_or_else(|| AppError::NotFound("This channel is not a ticket.".to_string()))
    }
}
