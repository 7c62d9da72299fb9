use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260302_000001_create_guild_config_table::GuildConfig,
    m20260302_000002_create_ticket_table::Ticket,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(GuildConfig::Table)
                    .add_column(big_integer_null(GuildConfig::WarnAutoclose))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Ticket::Table)
                    .add_column(boolean(Ticket::Notified).default(false))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Ticket::Table)
                    .drop_column(Ticket::Notified)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(GuildConfig::Table)
                    .drop_column(GuildConfig::WarnAutoclose)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
