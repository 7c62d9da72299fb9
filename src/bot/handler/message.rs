//! Message handler: link discovery, anonymous staff replies and ticket activity.

use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, Context, CreateAllowedMentions, CreateEmbed, CreateMessage, EditChannel, Message,
    MessageId,
};

use crate::{
    bot::embed::{self, DiscoveredMessage, QuotedBody},
    error::AppError,
    model::{guild::GuildSettings, ticket::Ticket},
    service::{settings::SettingsService, ticket::TicketService},
    util::{
        interval,
        message_link::{self, MessageLink},
        topic::refresh_close_time,
    },
};

/// Handles a message sent in a guild channel.
///
/// Bot and direct messages are ignored. Ticket activity is always recorded, even
/// when an earlier step fails.
///
/// # Arguments
/// - `db` - Database connection
/// - `ctx` - Discord context for the HTTP client
/// - `message` - The message that was sent
pub async fn handle_message(db: &DatabaseConnection, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let settings = match SettingsService::new(db).ensure_guild(guild_id.get()).await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load config for guild {}: {:?}", guild_id, e);
            return;
        }
    };

    if settings.msg_discovery {
        if let Some(link) = message_link::parse(&message.content) {
            if let Err(e) = discover(&ctx, &message, link).await {
                tracing::warn!("Message discovery failed in {}: {:?}", message.channel_id, e);
            }
        }
    }

    let ticket_service = TicketService::new(db);
    let ticket = match ticket_service.find(message.channel_id.get()).await {
        Ok(Some(ticket)) => ticket,
        Ok(None) => return,
        Err(e) => {
            tracing::error!("Failed to look up ticket {}: {:?}", message.channel_id, e);
            return;
        }
    };

    if ticket.anonymous {
        if let Err(e) = anonymize(db, &ctx, &message, &settings).await {
            tracing::error!("Failed to anonymise message in {}: {:?}", message.channel_id, e);
        }
    }

    if settings.any_autoclose.is_some() {
        if let Err(e) = refresh_topic(&ctx, &message, &ticket, &settings).await {
            tracing::warn!("Failed to refresh topic of ticket {}: {:?}", ticket.channel_id, e);
        }
    }

    if let Err(e) = ticket_service
        .record_response(ticket.channel_id, *message.timestamp)
        .await
    {
        tracing::error!("Failed to record response in ticket {}: {:?}", ticket.channel_id, e);
    }
}

/// Quotes the linked message in the channel where the link was posted.
///
/// Links into other guilds are not resolved.
async fn discover(ctx: &Context, message: &Message, link: MessageLink) -> Result<(), AppError> {
    if message.guild_id.map(|id| id.get()) != Some(link.guild_id) {
        return Ok(());
    }

    let channel_id = ChannelId::new(link.channel_id);
    let found = channel_id
        .message(&ctx.http, MessageId::new(link.message_id))
        .await?;
    let channel_name = channel_id
        .to_channel(&ctx.http)
        .await?
        .guild()
        .map(|channel| channel.name)
        .unwrap_or_else(|| "an unknown channel".to_string());

    let body = match found.embeds.first() {
        Some(captured) if found.content.is_empty() => {
            QuotedBody::Embed(Box::new(captured.clone()))
        }
        _ => QuotedBody::Text(found.content.clone()),
    };

    let quote = embed::discovery(&DiscoveredMessage {
        author_name: found.author.name.clone(),
        author_avatar: found.author.face(),
        body,
        image: found.attachments.first().map(|attachment| attachment.url.clone()),
        channel_name,
        sent_at: *found.timestamp,
    });

    message
        .channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new()
                .embed(quote)
                .reference_message(message)
                .allowed_mentions(CreateAllowedMentions::new()),
        )
        .await?;

    Ok(())
}

/// Re-sends a staff member's message under the staff team name.
///
/// Messages from members without a staff role are left alone.
async fn anonymize(
    db: &DatabaseConnection,
    ctx: &Context,
    message: &Message,
    settings: &GuildSettings,
) -> Result<(), AppError> {
    let role_ids: Vec<u64> = message
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
        .unwrap_or_default();

    if !TicketService::new(db)
        .is_staff(settings.guild_id, &role_ids)
        .await?
    {
        return Ok(());
    }

    let embeds: Vec<CreateEmbed> = message.embeds.iter().cloned().map(CreateEmbed::from).collect();
    let resend = CreateMessage::new()
        .content(format!("**{}:** {}", settings.staff_team_name, message.content))
        .embeds(embeds)
        .allowed_mentions(CreateAllowedMentions::new());

    message.channel_id.send_message(&ctx.http, resend).await?;
    ctx.http
        .delete_message(message.channel_id, message.id, Some("Anonymous staff message"))
        .await?;

    Ok(())
}

/// Pushes the any-response close time in the ticket topic forward.
async fn refresh_topic(
    ctx: &Context,
    message: &Message,
    ticket: &Ticket,
    settings: &GuildSettings,
) -> Result<(), AppError> {
    let Some(minutes) = settings.any_autoclose else {
        return Ok(());
    };

    let Some(channel) = message.channel_id.to_channel(&ctx.http).await?.guild() else {
        return Ok(());
    };

    let Some(close_at) = interval::after(*message.timestamp, minutes) else {
        tracing::warn!(
            "Out-of-range any-response autoclose of {} minutes in guild {}",
            minutes,
            settings.guild_id
        );
        return Ok(());
    };
    let topic = refresh_close_time(channel.topic.as_deref(), &channel.name, close_at);

    if channel.topic.as_deref() == Some(topic.as_str()) {
        return Ok(());
    }

    ChannelId::new(ticket.channel_id)
        .edit(
            &ctx.http,
            EditChannel::new()
                .topic(topic)
                .audit_log_reason("Refreshing autoclose time."),
        )
        .await?;

    Ok(())
}
