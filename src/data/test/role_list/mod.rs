use crate::{
    data::role_list::RoleListRepository,
    model::role_list::{RoleList, ToggleOutcome},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod contains_any;
mod remove_role;
mod toggle;
