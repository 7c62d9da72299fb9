//! Role list repository.
//!
//! Staff, observer and community role lists share one table keyed by
//! `(guild_id, list, role_id)`, so membership is a set per guild and list.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::role_list::{RoleList, ToggleOutcome};

pub struct RoleListRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleListRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds the role to the list, or removes it if already present.
    ///
    /// The guild configuration must exist.
    ///
    /// # Returns
    /// - `Ok(ToggleOutcome::Added)` - Role was not in the list and has been added
    /// - `Ok(ToggleOutcome::Removed)` - Role was in the list and has been removed
    /// - `Err(DbErr)` - Database error during lookup, insert or delete
    pub async fn toggle(
        &self,
        guild_id: u64,
        list: RoleList,
        role_id: u64,
    ) -> Result<ToggleOutcome, DbErr> {
        let key = (guild_id as i64, list.as_str().to_string(), role_id as i64);

        if let Some(existing) = entity::prelude::GuildRoleList::find_by_id(key.clone())
            .one(self.db)
            .await?
        {
            let active: entity::guild_role_list::ActiveModel = existing.into();
            active.delete(self.db).await?;
            return Ok(ToggleOutcome::Removed);
        }

        entity::guild_role_list::ActiveModel {
            guild_id: ActiveValue::Set(key.0),
            list: ActiveValue::Set(key.1),
            role_id: ActiveValue::Set(key.2),
        }
        .insert(self.db)
        .await?;

        Ok(ToggleOutcome::Added)
    }

    /// Gets every role ID in a guild's list, ordered by ID.
    pub async fn get_all(&self, guild_id: u64, list: RoleList) -> Result<Vec<u64>, DbErr> {
        let rows = entity::prelude::GuildRoleList::find()
            .filter(entity::guild_role_list::Column::GuildId.eq(guild_id as i64))
            .filter(entity::guild_role_list::Column::List.eq(list.as_str()))
            .order_by_asc(entity::guild_role_list::Column::RoleId)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.role_id as u64).collect())
    }

    /// Checks whether any of the given roles is in the list.
    pub async fn contains_any(
        &self,
        guild_id: u64,
        list: RoleList,
        role_ids: &[u64],
    ) -> Result<bool, DbErr> {
        if role_ids.is_empty() {
            return Ok(false);
        }

        let count = entity::prelude::GuildRoleList::find()
            .filter(entity::guild_role_list::Column::GuildId.eq(guild_id as i64))
            .filter(entity::guild_role_list::Column::List.eq(list.as_str()))
            .filter(
                entity::guild_role_list::Column::RoleId
                    .is_in(role_ids.iter().map(|id| *id as i64)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Removes a role from every list in the guild.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of list entries removed
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn remove_role(&self, guild_id: u64, role_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::GuildRoleList::delete_many()
            .filter(entity::guild_role_list::Column::GuildId.eq(guild_id as i64))
            .filter(entity::guild_role_list::Column::RoleId.eq(role_id as i64))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
