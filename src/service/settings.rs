//! Guild settings managed through `/settings`.

use sea_orm::DatabaseConnection;
use serenity::all::Role;

use crate::{
    data::{
        guild::GuildRepository, role_list::RoleListRepository, ticket_bot::TicketBotRepository,
        ticket_type::TicketTypeRepository,
    },
    error::{validation::ValidationError, AppError},
    model::{
        guild::{
            AutocloseKind, BlockKind, GuildFlag, GuildSettings, SettingChange,
            OPEN_MESSAGE_MAX_LEN, STAFF_TEAM_NAME_MAX_LEN,
        },
        role_list::{RoleList, ToggleOutcome},
        ticket_type::{ToggleTicketTypeParam, PREFIX_MAX_LEN},
    },
    util::interval,
};

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a guild's settings, creating the defaults on first reference.
    pub async fn ensure_guild(&self, guild_id: u64) -> Result<GuildSettings, AppError> {
        Ok(GuildRepository::new(self.db).get_or_create(guild_id).await?)
    }

    /// Registers or unregisters a ticket bot.
    pub async fn toggle_ticket_bot(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<ToggleOutcome, AppError> {
        self.ensure_guild(guild_id).await?;

        Ok(TicketBotRepository::new(self.db)
            .toggle(guild_id, user_id)
            .await?)
    }

    /// Adds or removes a role from one of the guild's role lists.
    pub async fn toggle_role(
        &self,
        guild_id: u64,
        list: RoleList,
        role: &Role,
    ) -> Result<ToggleOutcome, AppError> {
        self.ensure_guild(guild_id).await?;

        let outcome = RoleListRepository::new(self.db)
            .toggle(guild_id, list, role.id.get())
            .await?;

        tracing::info!(
            "{} role list in guild {}: {:?} {} ({})",
            list.label(),
            guild_id,
            outcome,
            role.name,
            role.id
        );

        Ok(outcome)
    }

    /// Sets the staff notes open message.
    ///
    /// # Returns
    /// - `Ok(SettingChange<String>)` - Previous and new message
    /// - `Err(AppError::ValidationErr)` - Message exceeds the length limit
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_open_message(
        &self,
        guild_id: u64,
        message: &str,
    ) -> Result<SettingChange<String>, AppError> {
        validate_open_message(message)?;

        let previous = GuildRepository::new(self.db)
            .set_open_message(guild_id, message)
            .await?;

        Ok(SettingChange {
            previous,
            current: message.to_string(),
        })
    }

    /// Sets the name anonymised staff messages are posted under.
    pub async fn set_staff_team_name(
        &self,
        guild_id: u64,
        name: &str,
    ) -> Result<SettingChange<String>, AppError> {
        validate_staff_team_name(name)?;

        let previous = GuildRepository::new(self.db)
            .set_staff_team_name(guild_id, name)
            .await?;

        Ok(SettingChange {
            previous,
            current: name.to_string(),
        })
    }

    /// Sets an autoclose interval from day/hour/minute parts; all zero disables it.
    pub async fn set_autoclose(
        &self,
        guild_id: u64,
        kind: AutocloseKind,
        days: i64,
        hours: i64,
        minutes: i64,
    ) -> Result<SettingChange<Option<i64>>, AppError> {
        let current = interval::from_parts(days, hours, minutes)?;

        let previous = GuildRepository::new(self.db)
            .set_autoclose(guild_id, kind, current)
            .await?;

        Ok(SettingChange { previous, current })
    }

    /// Flips a boolean guild setting and returns the new value.
    pub async fn toggle_flag(&self, guild_id: u64, flag: GuildFlag) -> Result<bool, AppError> {
        Ok(GuildRepository::new(self.db).toggle(guild_id, flag).await?)
    }

    /// Sets the role used for a penalty; `None` unsets it.
    pub async fn set_block_role(
        &self,
        guild_id: u64,
        kind: BlockKind,
        role: Option<&Role>,
    ) -> Result<SettingChange<Option<u64>>, AppError> {
        let current = role.map(|role| role.id.get());

        let previous = GuildRepository::new(self.db)
            .set_block_role(guild_id, kind, current)
            .await?;

        Ok(SettingChange { previous, current })
    }

    /// Creates or removes a ticket type.
    pub async fn toggle_ticket_type(
        &self,
        param: ToggleTicketTypeParam,
    ) -> Result<ToggleOutcome, AppError> {
        validate_prefix(&param.prefix)?;
        self.ensure_guild(param.guild_id).await?;

        Ok(TicketTypeRepository::new(self.db).toggle(param).await?)
    }

    /// Forgets a deleted role everywhere the guild references it.
    pub async fn purge_role(&self, guild_id: u64, role_id: u64) -> Result<(), AppError> {
        let removed = RoleListRepository::new(self.db)
            .remove_role(guild_id, role_id)
            .await?;
        GuildRepository::new(self.db)
            .clear_role(guild_id, role_id)
            .await?;

        if removed > 0 {
            tracing::info!(
                "Removed deleted role {} from {} role list(s) in guild {}",
                role_id,
                removed,
                guild_id
            );
        }

        Ok(())
    }

    /// Deletes everything stored for a guild the bot has left.
    pub async fn remove_guild(&self, guild_id: u64) -> Result<bool, AppError> {
        Ok(GuildRepository::new(self.db).delete(guild_id).await?)
    }
}

fn validate_open_message(message: &str) -> Result<(), ValidationError> {
    let len = message.chars().count();
    if len > OPEN_MESSAGE_MAX_LEN {
        return Err(ValidationError::MessageTooLong {
            max: OPEN_MESSAGE_MAX_LEN,
            len,
        });
    }

    Ok(())
}

fn validate_staff_team_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if len > STAFF_TEAM_NAME_MAX_LEN {
        return Err(ValidationError::NameTooLong {
            max: STAFF_TEAM_NAME_MAX_LEN,
            len,
        });
    }

    Ok(())
}

fn validate_prefix(prefix: &str) -> Result<(), ValidationError> {
    let len = prefix.chars().count();
    if len == 0 || len > PREFIX_MAX_LEN {
        return Err(ValidationError::InvalidPrefix {
            max: PREFIX_MAX_LEN,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, serenity::create_test_role};

    #[test]
    fn open_message_limit_counts_characters() {
        assert!(validate_open_message(&"é".repeat(200)).is_ok());
        assert_eq!(
            validate_open_message(&"a".repeat(201)),
            Err(ValidationError::MessageTooLong { max: 200, len: 201 })
        );
    }

    #[test]
    fn staff_team_name_limit() {
        assert!(validate_staff_team_name(&"a".repeat(40)).is_ok());
        assert!(validate_staff_team_name(&"a".repeat(41)).is_err());
    }

    #[test]
    fn prefix_must_be_non_empty_and_short() {
        assert!(validate_prefix("bug").is_ok());
        assert!(validate_prefix("").is_err());
        assert!(validate_prefix(&"p".repeat(21)).is_err());
    }

    #[tokio::test]
    async fn toggle_role_creates_guild_and_restores_on_second_toggle() -> Result<(), AppError> {
        let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let role = create_test_role(1, 10, "Support");

        let service = SettingsService::new(db);

        assert_eq!(
            service.toggle_role(1, RoleList::Staff, &role).await?,
            ToggleOutcome::Added
        );
        assert_eq!(
            service.toggle_role(1, RoleList::Staff, &role).await?,
            ToggleOutcome::Removed
        );
        assert!(RoleListRepository::new(db)
            .get_all(1, RoleList::Staff)
            .await?
            .is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn rejects_long_open_message_without_writing() -> Result<(), AppError> {
        let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = SettingsService::new(db);
        let result = service.set_open_message(1, &"x".repeat(201)).await;

        assert!(matches!(
            result,
            Err(AppError::ValidationErr(ValidationError::MessageTooLong { .. }))
        ));
        assert!(GuildRepository::new(db).find(1).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn autoclose_zero_disables() -> Result<(), AppError> {
        let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = SettingsService::new(db);

        let set = service
            .set_autoclose(1, AutocloseKind::FirstResponse, 1, 0, 30)
            .await?;
        assert_eq!(set.previous, None);
        assert_eq!(set.current, Some(24 * 60 + 30));

        let cleared = service
            .set_autoclose(1, AutocloseKind::FirstResponse, 0, 0, 0)
            .await?;
        assert_eq!(cleared.previous, Some(24 * 60 + 30));
        assert_eq!(cleared.current, None);

        Ok(())
    }

    #[tokio::test]
    async fn autowarn_beyond_cap_is_rejected_without_writing() -> Result<(), AppError> {
        let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = SettingsService::new(db);
        service
            .set_autoclose(1, AutocloseKind::Warning, 0, 1, 0)
            .await?;

        let result = service
            .set_autoclose(1, AutocloseKind::Warning, 9_007_199_254_740_991, 0, 0)
            .await;
        assert!(matches!(
            result,
            Err(AppError::ValidationErr(ValidationError::DurationTooLong { .. }))
        ));

        let settings = service.ensure_guild(1).await?;
        assert_eq!(settings.warn_autoclose, Some(60));

        Ok(())
    }

    #[tokio::test]
    async fn block_role_set_and_unset() -> Result<(), AppError> {
        let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let role = create_test_role(1, 66, "No Support");

        let service = SettingsService::new(db);

        let set = service
            .set_block_role(1, BlockKind::Support, Some(&role))
            .await?;
        assert_eq!(set.current, Some(66));

        let unset = service.set_block_role(1, BlockKind::Support, None).await?;
        assert_eq!(unset.previous, Some(66));
        assert_eq!(unset.current, None);

        Ok(())
    }

    #[tokio::test]
    async fn purge_role_clears_lists_and_blocks() -> Result<(), AppError> {
        let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let role = create_test_role(1, 66, "Helpers");

        let service = SettingsService::new(db);
        service.toggle_role(1, RoleList::Community, &role).await?;
        service
            .set_block_role(1, BlockKind::Helping, Some(&role))
            .await?;

        service.purge_role(1, 66).await?;

        let settings = service.ensure_guild(1).await?;
        assert_eq!(settings.helping_block, None);
        assert!(RoleListRepository::new(db)
            .get_all(1, RoleList::Community)
            .await?
            .is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn ticket_type_prefix_is_validated() -> Result<(), AppError> {
        let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = SettingsService::new(db)
            .toggle_ticket_type(ToggleTicketTypeParam {
                guild_id: 1,
                prefix: String::new(),
                community_ping: true,
                community_access: true,
                strip_buttons: true,
                ignore: false,
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::ValidationErr(ValidationError::InvalidPrefix { .. }))
        ));

        Ok(())
    }
}
