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
                    .table(GuildRoleList::Table)
                    .if_not_exists()
                    .col(big_integer(GuildRoleList::GuildId))
                    .col(string_len(GuildRoleList::List, 16))
                    .col(big_integer(GuildRoleList::RoleId))
                    .primary_key(
                        Index::create()
                            .col(GuildRoleList::GuildId)
                            .col(GuildRoleList::List)
                            .col(GuildRoleList::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_role_list_guild_id")
                            .from(GuildRoleList::Table, GuildRoleList::GuildId)
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
            .drop_table(Table::drop().table(GuildRoleList::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildRoleList {
    Table,
    GuildId,
    List,
    RoleId,
}
