use crate::{data::member::MemberRepository, model::guild::BlockKind};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod clear_penalty;
mod get_or_create;
mod set_penalty;
