//! Per-guild configuration domain models.

/// Default template posted into a new ticket's staff notes thread.
pub const DEFAULT_OPEN_MESSAGE: &str = "Staff notes for Ticket $channel.";

/// Default name shown on anonymised staff messages.
pub const DEFAULT_STAFF_TEAM_NAME: &str = "Staff Team";

/// Maximum length, in characters, of the staff notes open message.
pub const OPEN_MESSAGE_MAX_LEN: usize = 200;

/// Maximum length, in characters, of the staff team name.
pub const STAFF_TEAM_NAME_MAX_LEN: usize = 40;

/// Configuration for a single guild.
///
/// Autoclose intervals are whole minutes; `None` means the feature is disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSettings {
    pub guild_id: u64,
    pub open_message: String,
    pub staff_team_name: String,
    pub first_autoclose: Option<i64>,
    pub any_autoclose: Option<i64>,
    pub warn_autoclose: Option<i64>,
    pub msg_discovery: bool,
    pub strip_buttons: bool,
    pub support_block: Option<u64>,
    pub helping_block: Option<u64>,
}

impl GuildSettings {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::guild_config::Model) -> Self {
        Self {
            guild_id: entity.guild_id as u64,
            open_message: entity.open_message,
            staff_team_name: entity.staff_team_name,
            first_autoclose: entity.first_autoclose,
            any_autoclose: entity.any_autoclose,
            warn_autoclose: entity.warn_autoclose,
            msg_discovery: entity.msg_discovery,
            strip_buttons: entity.strip_buttons,
            support_block: entity.support_block.map(|id| id as u64),
            helping_block: entity.helping_block.map(|id| id as u64),
        }
    }

    pub fn autoclose(&self, kind: AutocloseKind) -> Option<i64> {
        match kind {
            AutocloseKind::FirstResponse => self.first_autoclose,
            AutocloseKind::AnyResponse => self.any_autoclose,
            AutocloseKind::Warning => self.warn_autoclose,
        }
    }

    /// Role applied to members serving the given penalty, if configured.
    pub fn block_role(&self, kind: BlockKind) -> Option<u64> {
        match kind {
            BlockKind::Support => self.support_block,
            BlockKind::Helping => self.helping_block,
        }
    }

    pub fn flag(&self, flag: GuildFlag) -> bool {
        match flag {
            GuildFlag::MsgDiscovery => self.msg_discovery,
            GuildFlag::StripButtons => self.strip_buttons,
        }
    }
}

/// Which inactivity interval a setting refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutocloseKind {
    /// Close a ticket nobody has answered since it was opened.
    FirstResponse,
    /// Close a ticket after its last message.
    AnyResponse,
    /// Warn inside a ticket after its last message.
    Warning,
}

impl AutocloseKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstResponse => "Autoclose",
            Self::AnyResponse => "Any-response autoclose",
            Self::Warning => "Inactivity warning",
        }
    }
}

/// Boolean guild settings toggled by slash commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuildFlag {
    MsgDiscovery,
    StripButtons,
}

impl GuildFlag {
    pub fn label(self) -> &'static str {
        match self {
            Self::MsgDiscovery => "Message discovery",
            Self::StripButtons => "Button stripping",
        }
    }
}

/// Penalty roles a guild can configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Member may not open tickets.
    Support,
    /// Member may not see other users' tickets.
    Helping,
}

impl BlockKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Support => "support block",
            Self::Helping => "helping block",
        }
    }
}

/// Old and new value of a setting after a change.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingChange<T> {
    pub previous: T,
    pub current: T,
}
