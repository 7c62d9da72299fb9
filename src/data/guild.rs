//! Guild configuration repository.
//!
//! Every guild the bot sees gets exactly one `guild_config` row, created lazily with
//! default settings. All other per-guild tables reference it, so callers that insert
//! child rows go through [`GuildRepository::get_or_create`] first.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};

use crate::model::guild::{
    AutocloseKind, BlockKind, GuildFlag, GuildSettings, DEFAULT_OPEN_MESSAGE,
    DEFAULT_STAFF_TEAM_NAME,
};

pub struct GuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a guild's configuration without creating it.
    pub async fn find(&self, guild_id: u64) -> Result<Option<GuildSettings>, DbErr> {
        let entity = entity::prelude::GuildConfig::find_by_id(guild_id as i64)
            .one(self.db)
            .await?;

        Ok(entity.map(GuildSettings::from_entity))
    }

    /// Gets a guild's configuration, inserting the defaults on first reference.
    ///
    /// Two events for an unseen guild can race to insert; the loser re-reads the row
    /// the winner inserted.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Existing or freshly created configuration
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn get_or_create(&self, guild_id: u64) -> Result<GuildSettings, DbErr> {
        let entity = self.get_or_create_entity(guild_id).await?;

        Ok(GuildSettings::from_entity(entity))
    }

    async fn get_or_create_entity(
        &self,
        guild_id: u64,
    ) -> Result<entity::guild_config::Model, DbErr> {
        if let Some(existing) = entity::prelude::GuildConfig::find_by_id(guild_id as i64)
            .one(self.db)
            .await?
        {
            return Ok(existing);
        }

        let inserted = entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            open_message: ActiveValue::Set(DEFAULT_OPEN_MESSAGE.to_string()),
            staff_team_name: ActiveValue::Set(DEFAULT_STAFF_TEAM_NAME.to_string()),
            first_autoclose: ActiveValue::Set(None),
            any_autoclose: ActiveValue::Set(None),
            warn_autoclose: ActiveValue::Set(None),
            msg_discovery: ActiveValue::Set(true),
            strip_buttons: ActiveValue::Set(false),
            support_block: ActiveValue::Set(None),
            helping_block: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await;

        match inserted {
            Ok(model) => Ok(model),
            Err(err) => entity::prelude::GuildConfig::find_by_id(guild_id as i64)
                .one(self.db)
                .await?
                .ok_or(err),
        }
    }

    /// Sets the staff notes open message.
    ///
    /// # Returns
    /// - `Ok(String)` - The previous message
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_open_message(&self, guild_id: u64, message: &str) -> Result<String, DbErr> {
        let entity = self.get_or_create_entity(guild_id).await?;
        let previous = entity.open_message.clone();

        let mut active: entity::guild_config::ActiveModel = entity.into();
        active.open_message = ActiveValue::Set(message.to_string());
        active.update(self.db).await?;

        Ok(previous)
    }

    /// Sets the name used for anonymised staff messages.
    ///
    /// # Returns
    /// - `Ok(String)` - The previous name
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_staff_team_name(&self, guild_id: u64, name: &str) -> Result<String, DbErr> {
        let entity = self.get_or_create_entity(guild_id).await?;
        let previous = entity.staff_team_name.clone();

        let mut active: entity::guild_config::ActiveModel = entity.into();
        active.staff_team_name = ActiveValue::Set(name.to_string());
        active.update(self.db).await?;

        Ok(previous)
    }

    /// Sets an autoclose interval in minutes; `None` disables it.
    ///
    /// # Returns
    /// - `Ok(Option<i64>)` - The previous interval
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_autoclose(
        &self,
        guild_id: u64,
        kind: AutocloseKind,
        minutes: Option<i64>,
    ) -> Result<Option<i64>, DbErr> {
        let entity = self.get_or_create_entity(guild_id).await?;
        let mut active: entity::guild_config::ActiveModel = entity.clone().into();

        let previous = match kind {
            AutocloseKind::FirstResponse => {
                active.first_autoclose = ActiveValue::Set(minutes);
                entity.first_autoclose
            }
            AutocloseKind::AnyResponse => {
                active.any_autoclose = ActiveValue::Set(minutes);
                entity.any_autoclose
            }
            AutocloseKind::Warning => {
                active.warn_autoclose = ActiveValue::Set(minutes);
                entity.warn_autoclose
            }
        };
        active.update(self.db).await?;

        Ok(previous)
    }

    /// Flips a boolean setting.
    ///
    /// # Returns
    /// - `Ok(bool)` - The new value
    /// - `Err(DbErr)` - Database error during update
    pub async fn toggle(&self, guild_id: u64, flag: GuildFlag) -> Result<bool, DbErr> {
        let entity = self.get_or_create_entity(guild_id).await?;
        let mut active: entity::guild_config::ActiveModel = entity.clone().into();

        let current = match flag {
            GuildFlag::MsgDiscovery => {
                active.msg_discovery = ActiveValue::Set(!entity.msg_discovery);
                !entity.msg_discovery
            }
            GuildFlag::StripButtons => {
                active.strip_buttons = ActiveValue::Set(!entity.strip_buttons);
                !entity.strip_buttons
            }
        };
        active.update(self.db).await?;

        Ok(current)
    }

    /// Sets or unsets a penalty role.
    ///
    /// # Returns
    /// - `Ok(Option<u64>)` - The previously configured role
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_block_role(
        &self,
        guild_id: u64,
        kind: BlockKind,
        role_id: Option<u64>,
    ) -> Result<Option<u64>, DbErr> {
        let entity = self.get_or_create_entity(guild_id).await?;
        let mut active: entity::guild_config::ActiveModel = entity.clone().into();
        let value = role_id.map(|id| id as i64);

        let previous = match kind {
            BlockKind::Support => {
                active.support_block = ActiveValue::Set(value);
                entity.support_block
            }
            BlockKind::Helping => {
                active.helping_block = ActiveValue::Set(value);
                entity.helping_block
            }
        };
        active.update(self.db).await?;

        Ok(previous.map(|id| id as u64))
    }

    /// Unsets any penalty role that points at a deleted role.
    ///
    /// Does nothing when the guild has no configuration or does not use the role.
    pub async fn clear_role(&self, guild_id: u64, role_id: u64) -> Result<(), DbErr> {
        let Some(entity) = entity::prelude::GuildConfig::find_by_id(guild_id as i64)
            .one(self.db)
            .await?
        else {
            return Ok(());
        };

        let role = Some(role_id as i64);
        if entity.support_block != role && entity.helping_block != role {
            return Ok(());
        }

        let mut active: entity::guild_config::ActiveModel = entity.clone().into();
        if entity.support_block == role {
            active.support_block = ActiveValue::Set(None);
        }
        if entity.helping_block == role {
            active.helping_block = ActiveValue::Set(None);
        }
        active.update(self.db).await?;

        Ok(())
    }

    /// Deletes a guild's configuration and every row that belongs to it.
    ///
    /// Child rows are removed explicitly inside one transaction so the result does
    /// not depend on the backend enforcing foreign keys.
    ///
    /// # Returns
    /// - `Ok(true)` - Configuration existed and was deleted
    /// - `Ok(false)` - Guild had no configuration
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, guild_id: u64) -> Result<bool, DbErr> {
        let id = guild_id as i64;
        let txn = self.db.begin().await?;

        entity::prelude::Ticket::delete_many()
            .filter(entity::ticket::Column::GuildId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Member::delete_many()
            .filter(entity::member::Column::GuildId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::GuildRoleList::delete_many()
            .filter(entity::guild_role_list::Column::GuildId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::TicketBot::delete_many()
            .filter(entity::ticket_bot::Column::GuildId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::TicketType::delete_many()
            .filter(entity::ticket_type::Column::GuildId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::GuildConfig::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
