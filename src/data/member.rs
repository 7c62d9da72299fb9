//! Member penalty repository.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::{
    guild::BlockKind,
    member::{penalty_status, Member},
};

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a member's record, inserting a clean one on first reference.
    ///
    /// The guild configuration must exist.
    pub async fn get_or_create(&self, guild_id: u64, user_id: u64) -> Result<Member, DbErr> {
        let entity = self.get_or_create_entity(guild_id, user_id).await?;

        Member::from_entity(entity)
    }

    async fn get_or_create_entity(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<entity::member::Model, DbErr> {
        let key = (guild_id as i64, user_id as i64);
        if let Some(existing) = entity::prelude::Member::find_by_id(key).one(self.db).await? {
            return Ok(existing);
        }

        let inserted = entity::member::ActiveModel {
            guild_id: ActiveValue::Set(key.0),
            user_id: ActiveValue::Set(key.1),
            status: ActiveValue::Set(penalty_status(None)),
            status_till: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await;

        match inserted {
            Ok(model) => Ok(model),
            Err(err) => entity::prelude::Member::find_by_id(key)
                .one(self.db)
                .await?
                .ok_or(err),
        }
    }

    /// Records a penalty, replacing any previous one.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `kind` - Penalty to apply
    /// - `till` - When the penalty lapses; `None` is permanent
    pub async fn set_penalty(
        &self,
        guild_id: u64,
        user_id: u64,
        kind: BlockKind,
        till: Option<DateTime<Utc>>,
    ) -> Result<Member, DbErr> {
        let entity = self.get_or_create_entity(guild_id, user_id).await?;

        let mut active: entity::member::ActiveModel = entity.into();
        active.status = ActiveValue::Set(penalty_status(Some(kind)));
        active.status_till = ActiveValue::Set(till);
        let updated = active.update(self.db).await?;

        Member::from_entity(updated)
    }

    /// Clears any penalty the member carries.
    pub async fn clear_penalty(&self, guild_id: u64, user_id: u64) -> Result<Member, DbErr> {
        let entity = self.get_or_create_entity(guild_id, user_id).await?;

        let mut active: entity::member::ActiveModel = entity.into();
        active.status = ActiveValue::Set(penalty_status(None));
        active.status_till = ActiveValue::Set(None);
        let updated = active.update(self.db).await?;

        Member::from_entity(updated)
    }
}
