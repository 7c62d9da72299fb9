/// Maximum length, in characters, of a ticket type prefix.
pub const PREFIX_MAX_LEN: usize = 20;

/// Per-prefix overrides for tickets whose channel name starts with `prefix`.
///
/// Each flag can only narrow what the guild settings enable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketType {
    pub guild_id: u64,
    pub prefix: String,
    pub community_ping: bool,
    pub community_access: bool,
    pub strip_buttons: bool,
    /// Skip the whole ticket-open flow.
    pub ignore: bool,
}

impl TicketType {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::ticket_type::Model) -> Self {
        Self {
            guild_id: entity.guild_id as u64,
            prefix: entity.prefix,
            community_ping: entity.community_ping,
            community_access: entity.community_access,
            strip_buttons: entity.strip_buttons,
            ignore: entity.ignore,
        }
    }
}

/// Parameters for toggling a ticket type.
#[derive(Debug, Clone)]
pub struct ToggleTicketTypeParam {
    pub guild_id: u64,
    pub prefix: String,
    pub community_ping: bool,
    pub community_access: bool,
    pub strip_buttons: bool,
    pub ignore: bool,
}
