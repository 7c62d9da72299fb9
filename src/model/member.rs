use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::guild::BlockKind;

/// A guild member's persisted penalty record.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub guild_id: u64,
    pub user_id: u64,
    /// Active penalty, `None` when the member is in good standing.
    pub penalty: Option<BlockKind>,
    /// When the penalty lapses; `None` is permanent.
    pub penalty_till: Option<DateTime<Utc>>,
}

impl Member {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Member)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored status code is not a known penalty
    pub fn from_entity(entity: entity::member::Model) -> Result<Self, DbErr> {
        Ok(Self {
            guild_id: entity.guild_id as u64,
            user_id: entity.user_id as u64,
            penalty: penalty_from_status(entity.status)?,
            penalty_till: entity.status_till,
        })
    }

    /// Whether the penalty has run out at `now`.
    pub fn penalty_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.penalty_till, Some(till) if till <= now)
    }
}

/// Status code persisted in `member.status`.
pub fn penalty_status(penalty: Option<BlockKind>) -> i16 {
    match penalty {
        None => 0,
        Some(BlockKind::Support) => 1,
        Some(BlockKind::Helping) => 2,
    }
}

fn penalty_from_status(status: i16) -> Result<Option<BlockKind>, DbErr> {
    match status {
        0 => Ok(None),
        1 => Ok(Some(BlockKind::Support)),
        2 => Ok(Some(BlockKind::Helping)),
        other => Err(DbErr::Custom(format!("Unknown member status: {}", other))),
    }
}

/// What to do with a member who joins a guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinPenalty {
    /// No penalty on record.
    None,
    /// The penalty ran out while the member was away and has been cleared.
    Expired,
    /// The guild no longer configures the penalty role; the penalty has been cleared.
    Pardoned,
    /// The penalty is active and this role must be re-applied.
    ApplyRole(u64),
}
