use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents, GuildId};
use serenity::http::Http;
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Builds the Discord client without connecting.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `db` - Database connection handed to the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - The client and its HTTP handle for the scheduler
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
) -> Result<(Client, Arc<Http>), AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents - must be enabled in
    // the Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(db, config.command_guild_id.map(GuildId::new));

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Connects the client and processes events until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
