use std::str::FromStr;

/// Named per-guild role lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleList {
    /// Roles allowed to use `/staff` and to post anonymously.
    Staff,
    /// Roles silently added to every staff notes thread.
    Observers,
    /// Roles granted access to every ticket channel.
    Community,
    /// Roles pinged when a ticket opens.
    CommunityPing,
}

impl RoleList {
    /// Value stored in `guild_role_list.list`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Observers => "observers",
            Self::Community => "community",
            Self::CommunityPing => "community_ping",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Staff => "Staff",
            Self::Observers => "Observers",
            Self::Community => "Community Support",
            Self::CommunityPing => "Community Ping",
        }
    }
}

impl FromStr for RoleList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "staff" => Ok(Self::Staff),
            "observers" => Ok(Self::Observers),
            "community" => Ok(Self::Community),
            "community_ping" => Ok(Self::CommunityPing),
            other => Err(format!("Unknown role list: {}", other)),
        }
    }
}

/// Result of toggling membership of a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}
