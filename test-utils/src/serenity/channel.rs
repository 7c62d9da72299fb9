//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

/// Creates a test Serenity text channel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord guild ID the channel belongs to
/// - `name` - Channel name
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(channel_id: u64, guild_id: u64, name: &str) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": 0,
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "topic": null,
        "parent_id": null,
        "last_message_id": null,
        "rate_limit_per_user": 0,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
