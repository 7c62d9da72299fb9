pub use sea_orm_migration::prelude::*;

mod m20260302_000001_create_guild_config_table;
mod m20260302_000002_create_ticket_table;
mod m20260302_000003_create_member_table;
mod m20260302_000004_create_guild_role_list_table;
mod m20260302_000005_create_ticket_bot_table;
mod m20260302_000006_create_ticket_type_table;
mod m20260316_000007_add_autoclose_warning;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260302_000001_create_guild_config_table::Migration),
            Box::new(m20260302_000002_create_ticket_table::Migration),
            Box::new(m20260302_000003_create_member_table::Migration),
            Box::new(m20260302_000004_create_guild_role_list_table::Migration),
            Box::new(m20260302_000005_create_ticket_bot_table::Migration),
            Box::new(m20260302_000006_create_ticket_type_table::Migration),
            Box::new(m20260316_000007_add_autoclose_warning::Migration),
        ]
    }
}
