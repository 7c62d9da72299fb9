use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildConfig::Table)
                    .if_not_exists()
                    .col(big_integer(GuildConfig::GuildId).primary_key())
                    .col(
                        string_len(GuildConfig::OpenMessage, 200)
                            .default("Staff notes for Ticket $channel."),
                    )
                    .col(string_len(GuildConfig::StaffTeamName, 40).default("Staff Team"))
                    .col(big_integer_null(GuildConfig::FirstAutoclose))
                    .col(big_integer_null(GuildConfig::AnyAutoclose))
                    .col(boolean(GuildConfig::MsgDiscovery).default(true))
                    .col(boolean(GuildConfig::StripButtons).default(false))
                    .col(big_integer_null(GuildConfig::SupportBlock))
                    .col(big_integer_null(GuildConfig::HelpingBlock))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildConfig {
    Table,
    GuildId,
    OpenMessage,
    StaffTeamName,
    FirstAutoclose,
    AnyAutoclose,
    WarnAutoclose,
    MsgDiscovery,
    StripButtons,
    SupportBlock,
    HelpingBlock,
}
