use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExploiterEvents::Table)
                    .if_not_exists()
                    .col(pk_auto(ExploiterEvents::Id))
                    .col(string(ExploiterEvents::GuildId))
                    .col(string(ExploiterEvents::Action))
                    .col(
                        timestamp_with_time_zone(ExploiterEvents::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Range stats filter on guild then creation time
        manager
            .create_index(
                Index::create()
                    .name("idx_exploiter_events_guild_created_at")
                    .table(ExploiterEvents::Table)
                    .col(ExploiterEvents::GuildId)
                    .col(ExploiterEvents::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExploiterEvents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExploiterEvents {
    Table,
    Id,
    GuildId,
    Action,
    CreatedAt,
}
