//! Member factory for creating test penalty records.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test member rows.
///
/// Status values: `0` no penalty, `1` support block, `2` helping block.
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    user_id: i64,
    status: i16,
    status_till: Option<DateTime<Utc>>,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory for an unpenalized member with a unique user ID.
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        Self {
            db,
            guild_id,
            user_id: next_id(),
            status: 0,
            status_till: None,
        }
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn status(mut self, status: i16) -> Self {
        self.status = status;
        self
    }

    pub fn status_till(mut self, status_till: Option<DateTime<Utc>>) -> Self {
        self.status_till = status_till;
        self
    }

    /// Builds and inserts the member entity into the database.
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            status: ActiveValue::Set(self.status),
            status_till: ActiveValue::Set(self.status_till),
        }
        .insert(self.db)
        .await
    }
}
