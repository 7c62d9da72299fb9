//! Guild configuration factory for creating test guild entities.
//!
//! Defaults mirror the column defaults declared in the migrations.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr};

/// Factory for creating test guild configurations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_config::GuildConfigFactory;
///
/// let guild = GuildConfigFactory::new(&db)
///     .guild_id(987654321)
///     .msg_discovery(false)
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::guild_config::Model,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new GuildConfigFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented unique value
    /// - open_message: `"Staff notes for Ticket $channel."`
    /// - staff_team_name: `"Staff Team"`
    /// - all autoclose intervals and block roles unset
    /// - msg_discovery: `true`, strip_buttons: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: entity::guild_config::Model {
                guild_id: next_id(),
                open_message: "Staff notes for Ticket $channel.".to_string(),
                staff_team_name: "Staff Team".to_string(),
                first_autoclose: None,
                any_autoclose: None,
                warn_autoclose: None,
                msg_discovery: true,
                strip_buttons: false,
                support_block: None,
                helping_block: None,
            },
        }
    }

    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.entity.guild_id = guild_id;
        self
    }

    pub fn open_message(mut self, open_message: impl Into<String>) -> Self {
        self.entity.open_message = open_message.into();
        self
    }

    pub fn staff_team_name(mut self, staff_team_name: impl Into<String>) -> Self {
        self.entity.staff_team_name = staff_team_name.into();
        self
    }

    /// Sets the first-response autoclose interval in minutes.
    pub fn first_autoclose(mut self, minutes: Option<i64>) -> Self {
        self.entity.first_autoclose = minutes;
        self
    }

    /// Sets the last-response autoclose interval in minutes.
    pub fn any_autoclose(mut self, minutes: Option<i64>) -> Self {
        self.entity.any_autoclose = minutes;
        self
    }

    /// Sets the inactivity warning interval in minutes.
    pub fn warn_autoclose(mut self, minutes: Option<i64>) -> Self {
        self.entity.warn_autoclose = minutes;
        self
    }

    pub fn msg_discovery(mut self, enabled: bool) -> Self {
        self.entity.msg_discovery = enabled;
        self
    }

    pub fn strip_buttons(mut self, enabled: bool) -> Self {
        self.entity.strip_buttons = enabled;
        self
    }

    pub fn support_block(mut self, role_id: Option<i64>) -> Self {
        self.entity.support_block = role_id;
        self
    }

    pub fn helping_block(mut self, role_id: Option<i64>) -> Self {
        self.entity.helping_block = role_id;
        self
    }

    /// Builds and inserts the guild configuration into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_config::Model)` - Created guild entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        let active: entity::guild_config::ActiveModel = self.entity.into();
        let active = active.reset_all();

        active.insert(self.db).await
    }
}

/// Creates a guild configuration with default values.
///
/// Shorthand for `GuildConfigFactory::new(db).build().await`.
pub async fn create_guild(
    db: &DatabaseConnection,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).build().await
}
