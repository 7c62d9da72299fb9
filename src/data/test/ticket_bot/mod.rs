use crate::{data::ticket_bot::TicketBotRepository, model::role_list::ToggleOutcome};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod is_ticket_bot;
mod toggle;
