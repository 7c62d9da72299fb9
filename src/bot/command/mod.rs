//! Slash commands.
//!
//! Each command module exposes `register()` returning its definition and `run()`
//! producing the reply embed. [`dispatch`] defers every interaction as ephemeral,
//! runs the command, and edits the deferred reply with the result or the error.

pub mod options;
pub mod settings;
pub mod staff;

use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, Context, CreateCommand, EditInteractionResponse};

use crate::{bot::embed, error::AppError};

/// Definitions of every slash command the bot registers.
pub fn all() -> Vec<CreateCommand> {
    vec![settings::register(), staff::register()]
}

/// Runs a slash command and replies with an ephemeral embed.
pub async fn dispatch(db: &DatabaseConnection, ctx: &Context, command: &CommandInteraction) {
    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::warn!("Failed to defer /{}: {:?}", command.data.name, e);
        return;
    }

    let result = match command.data.name.as_str() {
        "settings" => settings::run(db, command).await,
        "staff" => staff::run(db, ctx, command).await,
        other => Err(AppError::NotFound(format!("Unknown command `/{}`.", other))),
    };

    let reply = match result {
        Ok(reply) => reply,
        Err(err) => {
            if err.is_user_facing() {
                tracing::debug!("/{} rejected: {}", command.data.name, err);
            } else {
                tracing::error!("/{} failed: {:?}", command.data.name, err);
            }
            embed::error(&err)
        }
    };

    if let Err(e) = command
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(reply))
        .await
    {
        tracing::error!("Failed to reply to /{}: {:?}", command.data.name, e);
    }
}
