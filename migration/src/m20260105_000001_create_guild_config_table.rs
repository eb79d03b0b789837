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
                    .col(string(GuildConfig::GuildId))
                    .col(string(GuildConfig::OwnerId))
                    .col(boolean_null(GuildConfig::Approved).default(false))
                    .col(string_null(GuildConfig::ServerInvite))
                    .col(json_null(GuildConfig::Whitelist))
                    .col(json_null(GuildConfig::Blacklisted))
                    .col(string_null(GuildConfig::DefaultChannel))
                    .primary_key(
                        Index::create()
                            .name("pk_guild_config")
                            .col(GuildConfig::GuildId)
                            .col(GuildConfig::OwnerId),
                    )
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
    OwnerId,
    Approved,
    ServerInvite,
    Whitelist,
    Blacklisted,
    DefaultChannel,
}
