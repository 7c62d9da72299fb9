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
                    .table(TicketType::Table)
                    .if_not_exists()
                    .col(big_integer(TicketType::GuildId))
                    .col(string_len(TicketType::Prefix, 20))
                    .col(boolean(TicketType::CommunityPing).default(true))
                    .col(boolean(TicketType::CommunityAccess).default(true))
                    .col(boolean(TicketType::StripButtons).default(true))
                    .col(boolean(TicketType::Ignore).default(false))
                    .primary_key(
                        Index::create()
                            .col(TicketType::GuildId)
                            .col(TicketType::Prefix),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_type_guild_id")
                            .from(TicketType::Table, TicketType::GuildId)
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
            .drop_table(Table::drop().table(TicketType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketType {
    Table,
    GuildId,
    Prefix,
    CommunityPing,
    CommunityAccess,
    StripButtons,
    Ignore,
}
