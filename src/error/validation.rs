use thiserror::Error;

/// Invalid user input supplied to a slash command.
///
/// The `Display` text of every variant is shown to the invoking user as-is, so
/// messages are written for server administrators rather than developers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The message must be at most {max} characters long (got {len}).")]
    MessageTooLong { max: usize, len: usize },

    #[error("The name must be at most {max} characters long (got {len}).")]
    NameTooLong { max: usize, len: usize },

    #[error("The prefix must be between 1 and {max} characters long.")]
    InvalidPrefix { max: usize },

    #[error("Durations cannot be negative.")]
    NegativeDuration,

    #[error("Durations can be at most {max_days} days long.")]
    DurationTooLong { max_days: u64 },

    #[error("No {0} role is configured for this server.")]
    BlockRoleUnset(&'static str),

    #[error("This command can only be used inside a server.")]
    GuildOnly,

    #[error("Missing required option `{0}`.")]
    MissingOption(&'static str),

    #[error("Unknown sub-command `{0}`.")]
    UnknownSubcommand(String),
}
