use crate::{
    data::guild::GuildRepository,
    model::guild::{AutocloseKind, BlockKind, GuildFlag},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod clear_role;
mod delete;
mod get_or_create;
mod set_autoclose;
mod set_block_role;
mod set_open_message;
mod toggle;
