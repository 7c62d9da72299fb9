//! Ticket domain models.

use chrono::{DateTime, Utc};

use crate::model::{guild::GuildSettings, ticket_type::TicketType};

/// A ticket channel tracked by the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub channel_id: u64,
    pub guild_id: u64,
    pub staff_note_thread: Option<u64>,
    /// Staff messages are re-sent under the staff team name.
    pub anonymous: bool,
    pub last_response: DateTime<Utc>,
    /// An inactivity warning was posted since the last response.
    pub notified: bool,
}

impl Ticket {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::ticket::Model) -> Self {
        Self {
            channel_id: entity.channel_id as u64,
            guild_id: entity.guild_id as u64,
            staff_note_thread: entity.staff_note_thread.map(|id| id as u64),
            anonymous: entity.anonymous,
            last_response: entity.last_response,
            notified: entity.notified,
        }
    }
}

/// Parameters for persisting a newly opened ticket.
#[derive(Debug, Clone)]
pub struct CreateTicketParam {
    pub channel_id: u64,
    pub guild_id: u64,
    pub staff_note_thread: Option<u64>,
    pub opened_at: DateTime<Utc>,
}

/// Steps to run when a ticket bot opens a channel.
///
/// Built from the guild's settings and role lists, narrowed by the matched ticket
/// type. Role lists are empty when the step should be skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketOpenPlan {
    pub settings: GuildSettings,
    pub ticket_type: Option<TicketType>,
    pub observers: Vec<u64>,
    pub community_roles: Vec<u64>,
    pub community_pings: Vec<u64>,
    pub strip_buttons: bool,
}
