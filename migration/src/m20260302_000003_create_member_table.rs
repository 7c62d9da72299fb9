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
                    .table(Member::Table)
                    .if_not_exists()
                    .col(big_integer(Member::GuildId))
                    .col(big_integer(Member::UserId))
                    .col(small_integer(Member::Status).default(0))
                    .col(timestamp_with_time_zone_null(Member::StatusTill))
                    .primary_key(Index::create().col(Member::GuildId).col(Member::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_guild_id")
                            .from(Member::Table, Member::GuildId)
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
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    GuildId,
    UserId,
    Status,
    StatusTill,
}
