use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, EventHandler, Guild, GuildChannel, GuildId, Interaction, Member, Message, Ready,
    Role, RoleId, UnavailableGuild,
};
use serenity::async_trait;

pub mod channel;
pub mod guild;
pub mod interaction;
pub mod member;
pub mod message;
pub mod ready;
pub mod role;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    /// Guild to register slash commands in; global registration when `None`.
    pub command_guild_id: Option<GuildId>,
}

impl Handler {
    pub fn new(db: DatabaseConnection, command_guild_id: Option<GuildId>) -> Self {
        Self {
            db,
            command_guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, self.command_guild_id).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, ctx, guild, is_new).await;
    }

    /// Called when the bot is removed from a guild or the guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(&self.db, ctx, incomplete, full).await;
    }

    /// Called when a role is deleted from a guild
    async fn guild_role_delete(
        &self,
        ctx: Context,
        guild_id: GuildId,
        removed_role_id: RoleId,
        removed_role_data_if_in_cache: Option<Role>,
    ) {
        role::handle_guild_role_delete(
            &self.db,
            ctx,
            guild_id,
            removed_role_id,
            removed_role_data_if_in_cache,
        )
        .await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.db, ctx, new_member).await;
    }

    /// Called when a channel is created in a guild
    async fn channel_create(&self, ctx: Context, channel: GuildChannel) {
        channel::handle_channel_create(&self.db, ctx, channel).await;
    }

    /// Called when a channel is deleted from a guild
    async fn channel_delete(
        &self,
        ctx: Context,
        channel: GuildChannel,
        messages: Option<Vec<Message>>,
    ) {
        channel::handle_channel_delete(&self.db, ctx, channel, messages).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.db, ctx, message).await;
    }

    /// Called when a user invokes a slash command
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.db, ctx, interaction).await;
    }
}
