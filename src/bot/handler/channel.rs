//! Channel event handlers.
//!
//! A text channel is treated as a ticket when the audit log shows that one of the
//! guild's registered ticket bots created it. Opening a ticket runs a fixed
//! sequence of steps; only the staff notes thread, the ticket row and the topic
//! are required, everything else is best effort and logged at `warn` on failure.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    AutoArchiveDuration, ChannelId, ChannelType, Context, CreateAllowedMentions, CreateEmbed,
    CreateMessage, CreateThread, EditChannel, GetMessages, GuildChannel, GuildId, Mentionable,
    Message, MessageId, PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId, UserId,
};
use serenity::model::guild::audit_log::{Action, ChannelAction};
use std::time::Duration;

use crate::{
    data::ticket_bot::TicketBotRepository,
    error::AppError,
    model::{guild::BlockKind, ticket::{CreateTicketParam, TicketOpenPlan}},
    service::{settings::SettingsService, ticket::TicketService},
    util::{template::safe_substitute, topic::open_topic},
};

/// How many recent channel-create audit log entries to search for the creator.
const AUDIT_LOG_LOOKBACK: u8 = 3;

/// How long a community ping stays visible before it is deleted.
const COMMUNITY_PING_LINGER: Duration = Duration::from_millis(250);

/// Delay before stripping buttons so the ticket bot has posted its opening messages.
const STRIP_BUTTONS_DELAY: Duration = Duration::from_secs(1);

/// Handles the channel_create event.
///
/// Opens a ticket when a registered ticket bot created the text channel. Non-text
/// channels and channels created by anyone else are ignored.
///
/// # Arguments
/// - `db` - Database connection
/// - `ctx` - Discord context for the HTTP client and cache
/// - `channel` - The newly created guild channel
pub async fn handle_channel_create(db: &DatabaseConnection, ctx: Context, channel: GuildChannel) {
    if channel.kind != ChannelType::Text {
        return;
    }

    let guild_id = channel.guild_id;
    let creator = match find_creator(&ctx, &channel).await {
        Ok(Some(creator)) => creator,
        Ok(None) => {
            tracing::debug!(
                "No audit log entry for channel {} in guild {}",
                channel.name,
                guild_id
            );
            return;
        }
        Err(e) => {
            tracing::warn!("Failed to read audit log in guild {}: {:?}", guild_id, e);
            return;
        }
    };

    let ticket_service = TicketService::new(db);
    match ticket_service.is_ticket_bot(guild_id.get(), creator.get()).await {
        Ok(true) => {}
        Ok(false) => return,
        Err(e) => {
            tracing::error!("Failed to check ticket bots in guild {}: {:?}", guild_id, e);
            return;
        }
    }

    let plan = match ticket_service.plan_open(&channel).await {
        Ok(Some(plan)) => plan,
        Ok(None) => {
            tracing::debug!("Ignoring ticket {} in guild {}", channel.name, guild_id);
            return;
        }
        Err(e) => {
            tracing::error!(
                "Failed to plan ticket {} in guild {}: {:?}",
                channel.name,
                guild_id,
                e
            );
            return;
        }
    };

    if let Err(e) = open_ticket(db, &ctx, &channel, plan).await {
        tracing::error!(
            "Failed to open ticket {} in guild {}: {:?}",
            channel.name,
            guild_id,
            e
        );
    }
}

/// Handles the channel_delete event by forgetting the ticket, if it was one.
///
/// # Arguments
/// - `db` - Database connection
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `channel` - The deleted channel
/// - `_messages` - Cached messages from the channel (unused)
pub async fn handle_channel_delete(
    db: &DatabaseConnection,
    _ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    match TicketService::new(db).close(channel.id.get()).await {
        Ok(true) => tracing::info!("Closed ticket {} in guild {}", channel.name, channel.guild_id),
        Ok(false) => {}
        Err(e) => tracing::error!("Failed to delete ticket {}: {:?}", channel.id, e),
    }
}

async fn find_creator(
    ctx: &Context,
    channel: &GuildChannel,
) -> Result<Option<UserId>, serenity::Error> {
    let logs = channel
        .guild_id
        .audit_logs(
            &ctx.http,
            Some(Action::Channel(ChannelAction::Create)),
            None,
            None,
            Some(AUDIT_LOG_LOOKBACK),
        )
        .await?;

    Ok(logs
        .entries
        .iter()
        .find(|entry| entry.target_id.map(|target| target.get()) == Some(channel.id.get()))
        .map(|entry| entry.user_id))
}

async fn open_ticket(
    db: &DatabaseConnection,
    ctx: &Context,
    channel: &GuildChannel,
    plan: TicketOpenPlan,
) -> Result<(), AppError> {
    let guild_id = channel.guild_id;

    let thread = channel
        .id
        .create_thread(
            &ctx.http,
            CreateThread::new("Staff Notes")
                .kind(ChannelType::PrivateThread)
                .invitable(false)
                .auto_archive_duration(AutoArchiveDuration::OneWeek)
                .audit_log_reason(&format!("Staff notes for Ticket {}", channel.name)),
        )
        .await?;

    let mention = channel.id.mention().to_string();
    let open_message = safe_substitute(
        &plan.settings.open_message,
        &[("channel", mention.as_str())],
    );
    thread.id.say(&ctx.http, open_message).await?;

    TicketService::new(db)
        .open(CreateTicketParam {
            channel_id: channel.id.get(),
            guild_id: guild_id.get(),
            staff_note_thread: Some(thread.id.get()),
            opened_at: Utc::now(),
        })
        .await?;
    tracing::info!("Opened ticket {} in guild {}", channel.name, guild_id);

    if !plan.observers.is_empty() {
        ping_and_delete(ctx, thread.id, &plan.observers, None).await;
    }

    if let Some(role_id) = plan.settings.helping_block {
        deny_helping_block(db, ctx, channel, role_id).await;
    }

    if !plan.community_roles.is_empty() {
        grant_community_access(ctx, channel, &plan.community_roles).await;
    }

    if !plan.community_pings.is_empty() {
        ping_and_delete(ctx, channel.id, &plan.community_pings, Some(COMMUNITY_PING_LINGER)).await;
    }

    if plan.strip_buttons {
        tokio::time::sleep(STRIP_BUTTONS_DELAY).await;
        if let Err(e) = strip_buttons(db, ctx, channel).await {
            tracing::warn!("Failed to strip buttons in ticket {}: {:?}", channel.name, e);
        }
    }

    let topic = open_topic(
        &channel.name,
        channel.id.created_at().to_utc(),
        plan.settings.first_autoclose,
    );
    channel
        .id
        .edit(
            &ctx.http,
            EditChannel::new()
                .topic(topic)
                .audit_log_reason("More information for the ticket."),
        )
        .await?;

    Ok(())
}

/// Whether the role still exists; assumes it does when the guild is not cached.
fn role_exists(ctx: &Context, guild_id: GuildId, role_id: RoleId) -> bool {
    ctx.cache
        .guild(guild_id)
        .map_or(true, |guild| guild.roles.contains_key(&role_id))
}

/// Mentions roles in a channel then deletes the mention.
///
/// In a private thread this silently adds the roles' members.
async fn ping_and_delete(
    ctx: &Context,
    channel_id: ChannelId,
    roles: &[u64],
    linger: Option<Duration>,
) {
    let role_ids: Vec<RoleId> = roles.iter().map(|id| RoleId::new(*id)).collect();
    let content = role_ids
        .iter()
        .map(|role_id| role_id.mention().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let message = CreateMessage::new()
        .content(content)
        .allowed_mentions(CreateAllowedMentions::new().roles(role_ids));

    let sent = match channel_id.send_message(&ctx.http, message).await {
        Ok(sent) => sent,
        Err(e) => {
            tracing::warn!("Failed to mention roles in {}: {:?}", channel_id, e);
            return;
        }
    };

    if let Some(linger) = linger {
        tokio::time::sleep(linger).await;
    }

    if let Err(e) = ctx.http.delete_message(channel_id, sent.id, None).await {
        tracing::warn!("Failed to delete role mention in {}: {:?}", channel_id, e);
    }
}

async fn deny_helping_block(
    db: &DatabaseConnection,
    ctx: &Context,
    channel: &GuildChannel,
    role_id: u64,
) {
    let guild_id = channel.guild_id;
    let role = RoleId::new(role_id);

    if !role_exists(ctx, guild_id, role) {
        tracing::info!(
            "Helping block role {} no longer exists in guild {}, unsetting",
            role_id,
            guild_id
        );
        if let Err(e) = SettingsService::new(db)
            .set_block_role(guild_id.get(), BlockKind::Helping, None)
            .await
        {
            tracing::error!("Failed to unset helping block in guild {}: {:?}", guild_id, e);
        }
        return;
    }

    let overwrite = PermissionOverwrite {
        allow: Permissions::empty(),
        deny: Permissions::VIEW_CHANNEL
            | Permissions::SEND_MESSAGES
            | Permissions::ADD_REACTIONS
            | Permissions::READ_MESSAGE_HISTORY,
        kind: PermissionOverwriteType::Role(role),
    };

    if let Err(e) = channel.id.create_permission(&ctx.http, overwrite).await {
        tracing::warn!("Failed to deny helping block in {}: {:?}", channel.name, e);
    }
}

async fn grant_community_access(ctx: &Context, channel: &GuildChannel, roles: &[u64]) {
    let allow = Permissions::VIEW_CHANNEL
        | Permissions::SEND_MESSAGES
        | Permissions::ADD_REACTIONS
        | Permissions::READ_MESSAGE_HISTORY
        | Permissions::ATTACH_FILES
        | Permissions::EMBED_LINKS
        | Permissions::USE_APPLICATION_COMMANDS;

    for role_id in roles.iter().map(|id| RoleId::new(*id)) {
        if !role_exists(ctx, channel.guild_id, role_id) {
            tracing::warn!(
                "Community role {} missing in guild {}, skipping",
                role_id,
                channel.guild_id
            );
            continue;
        }

        let overwrite = PermissionOverwrite {
            allow,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Role(role_id),
        };

        if let Err(e) = channel.id.create_permission(&ctx.http, overwrite).await {
            tracing::warn!("Failed to grant community access in {}: {:?}", channel.name, e);
        }
    }
}

/// Re-posts the ticket bot's opening messages without their components.
///
/// Only the two oldest messages are considered; anything posted later is left alone.
async fn strip_buttons(
    db: &DatabaseConnection,
    ctx: &Context,
    channel: &GuildChannel,
) -> Result<(), AppError> {
    let ticket_bots = TicketBotRepository::new(db);
    let mut messages = channel
        .id
        .messages(&ctx.http, GetMessages::new().after(MessageId::new(1)).limit(2))
        .await?;
    messages.sort_by_key(|message| message.id);

    for message in messages {
        if message.embeds.is_empty()
            || !ticket_bots
                .is_ticket_bot(channel.guild_id.get(), message.author.id.get())
                .await?
        {
            continue;
        }

        let embeds = message.embeds.into_iter().map(CreateEmbed::from).collect();
        let mut resend = CreateMessage::new()
            .embeds(embeds)
            .allowed_mentions(CreateAllowedMentions::new());
        if !message.content.is_empty() {
            resend = resend.content(message.content);
        }

        channel.id.send_message(&ctx.http, resend).await?;
        ctx.http
            .delete_message(channel.id, message.id, Some("Stripping ticket buttons"))
            .await?;
    }

    Ok(())
}
