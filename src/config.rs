use crate::error::{config::ConfigError, AppError};

/// Runtime configuration loaded from the environment (and `.env` via `dotenvy`).
pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Register slash commands to this guild only instead of globally.
    ///
    /// Guild commands update instantly, which makes this handy during development.
    pub command_guild_id: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            command_guild_id: optional_id("DISCORD_COMMAND_GUILD_ID")?,
        })
    }
}

fn optional_id(name: &str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        _ => Ok(None),
    }
}
