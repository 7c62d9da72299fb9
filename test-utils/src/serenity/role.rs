//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role as it arrives in a resolved slash-command option.
///
/// The role is not hoisted, not managed, mentionable, and carries no permissions.
///
/// # Arguments
/// - `guild_id` - Discord guild ID owning the role
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(555, 123456789, "Support");
/// assert_eq!(role.name, "Support");
/// ```
pub fn create_test_role(guild_id: u64, role_id: u64, name: &str) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "guild_id": guild_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": "0",
        "managed": false,
        "mentionable": true,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
