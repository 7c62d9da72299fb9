use sea_orm_migration::{prelude::*, schema::*};

use super::m20260302_000001_create_guild_config_table::GuildConfig;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketBot::Table)
                    .if_not_exists()
                    .col(big_integer(TicketBot::GuildId))
                    .col(big_integer(TicketBot::UserId))
                    .primary_key(
                        Index::create()
                            .col(TicketBot::GuildId)
                            .col(TicketBot::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_bot_guild_id")
                            .from(TicketBot::Table, TicketBot::GuildId)
                            .to(GuildConfig::Table, GuildConfig::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketBot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketBot {
    Table,
    GuildId,
    UserId,
}
