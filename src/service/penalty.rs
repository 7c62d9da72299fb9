//! Support and helping blocks.
//!
//! A penalty is stored per member so it survives leaving and rejoining the guild.
//! The role itself is the guild's configured block role; removing that setting
//! pardons everyone serving the penalty the next time they join.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{guild::GuildRepository, member::MemberRepository},
    error::{validation::ValidationError, AppError},
    model::{guild::BlockKind, member::JoinPenalty},
    util::interval,
};

/// A penalty that has just been recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedPenalty {
    /// Role to give the member now.
    pub role_id: u64,
    /// `None` for a permanent penalty.
    pub till: Option<DateTime<Utc>>,
}

pub struct PenaltyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PenaltyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Decides what to do with a member who joined the guild.
    ///
    /// Expired penalties and penalties whose role is no longer configured are
    /// cleared as a side effect.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID of the joining member
    /// - `now` - Reference time for expiry
    ///
    /// # Returns
    /// - `Ok(JoinPenalty)` - Action for the bot to take
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn resolve_on_join(
        &self,
        guild_id: u64,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> Result<JoinPenalty, AppError> {
        let settings = GuildRepository::new(self.db).get_or_create(guild_id).await?;
        let member_repo = MemberRepository::new(self.db);
        let member = member_repo.get_or_create(guild_id, user_id).await?;

        let Some(kind) = member.penalty else {
            return Ok(JoinPenalty::None);
        };

        if member.penalty_expired(now) {
            member_repo.clear_penalty(guild_id, user_id).await?;
            return Ok(JoinPenalty::Expired);
        }

        match settings.block_role(kind) {
            Some(role_id) => Ok(JoinPenalty::ApplyRole(role_id)),
            None => {
                member_repo.clear_penalty(guild_id, user_id).await?;
                Ok(JoinPenalty::Pardoned)
            }
        }
    }

    /// Records a penalty against a member.
    ///
    /// A duration of zero is permanent.
    ///
    /// # Returns
    /// - `Ok(AppliedPenalty)` - Role to apply and expiry
    /// - `Err(AppError::ValidationErr)` - Negative duration, or the guild has no role
    ///   configured for this penalty
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn penalize(
        &self,
        guild_id: u64,
        user_id: u64,
        kind: BlockKind,
        (days, hours, minutes): (i64, i64, i64),
        now: DateTime<Utc>,
    ) -> Result<AppliedPenalty, AppError> {
        let duration = interval::from_parts(days, hours, minutes)?;
        let settings = GuildRepository::new(self.db).get_or_create(guild_id).await?;

        let role_id = settings
            .block_role(kind)
            .ok_or(ValidationError::BlockRoleUnset(kind.label()))?;
        let till = duration
            .map(|minutes| {
                interval::after(now, minutes).ok_or(ValidationError::DurationTooLong {
                    max_days: interval::MAX_DAYS,
                })
            })
            .transpose()?;

        MemberRepository::new(self.db)
            .set_penalty(guild_id, user_id, kind, till)
            .await?;

        Ok(AppliedPenalty { role_id, till })
    }

    /// Clears a member's penalty.
    ///
    /// # Returns
    /// - `Ok(Vec<u64>)` - Configured block roles to strip from the member
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn pardon(&self, guild_id: u64, user_id: u64) -> Result<Vec<u64>, AppError> {
        let settings = GuildRepository::new(self.db).get_or_create(guild_id).await?;

        MemberRepository::new(self.db)
            .clear_penalty(guild_id, user_id)
            .await?;

        Ok([BlockKind::Support, BlockKind::Helping]
            .into_iter()
            .filter_map(|kind| settings.block_role(kind))
            .collect())
    }
}
