use crate::{data::ticket::TicketRepository, model::ticket::CreateTicketParam};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_needing_warning;
mod record_response;
mod toggle_anonymous;
