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
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(big_integer(Ticket::ChannelId).primary_key())
                    .col(big_integer(Ticket::GuildId))
                    .col(big_integer_null(Ticket::StaffNoteThread))
                    .col(boolean(Ticket::Anonymous).default(false))
                    .col(
                        timestamp_with_time_zone(Ticket::LastResponse)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_guild_id")
                            .from(Ticket::Table, Ticket::GuildId)
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
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    ChannelId,
    GuildId,
    StaffNoteThread,
    Anonymous,
    LastResponse,
    Notified,
}
