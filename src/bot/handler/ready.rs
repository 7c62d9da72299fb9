//! Ready event handler for bot initialization.
//!
//! The ready event fires once per gateway connection. Slash commands are
//! (re-)registered here so command definitions always match the running build.

use serenity::all::{Command, Context, GuildId, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Registers slash commands globally, or to a single guild when a development
/// guild is configured.
///
/// # Arguments
/// - `ctx` - Discord context for the HTTP client
/// - `ready` - Ready event data containing bot user information
/// - `command_guild_id` - Development guild for command registration, if any
pub async fn handle_ready(ctx: Context, ready: Ready, command_guild_id: Option<GuildId>) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    let commands = command::all();
    let registered = match command_guild_id {
        Some(guild_id) => guild_id.set_commands(&ctx.http, commands).await,
        None => Command::set_global_commands(&ctx.http, commands).await,
    };

    match registered {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
