use crate::{
    data::ticket_type::TicketTypeRepository,
    model::{role_list::ToggleOutcome, ticket_type::ToggleTicketTypeParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod match_channel;
mod toggle;
