//! Error types and user-facing reply mapping.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors. Event
//! handlers log it and move on; slash commands translate it into an ephemeral reply
//! through [`AppError::user_message`].

pub mod config;
pub mod validation;

use thiserror::Error;

use crate::error::{config::ConfigError, validation::ValidationError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Invalid user input; the message is shown to the user.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Resource not found; the message is shown to the user.
    #[error("{0}")]
    NotFound(String),

    /// Caller lacks the required staff role; the message is shown to the user.
    #[error("{0}")]
    Forbidden(String),

    /// Internal error with custom message, logged but never shown.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Whether the error text is meant for the user who triggered it.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::ValidationErr(_) | Self::NotFound(_) | Self::Forbidden(_)
        )
    }

    /// Text to show the user for this error.
    ///
    /// Internal failures collapse into a generic message so database or Discord
    /// details never leak into a guild.
    pub fn user_message(&self) -> String {
        if self.is_user_facing() {
            self.to_string()
        } else {
            "Something went wrong while processing this command.".to_string()
        }
    }
}
