use sea_orm_migration::{prelude::*, schema::*};

use crate::cascade;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExpansionType::Table)
                    .if_not_exists()
                    .col(pk_auto(ExpansionType::Id))
                    .col(string(ExpansionType::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ResourceType::Table)
                    .if_not_exists()
                    .col(pk_auto(ResourceType::Id))
                    .col(string(ResourceType::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MilestoneType::Table)
                    .if_not_exists()
                    .col(pk_auto(MilestoneType::Id))
                    .col(string(MilestoneType::Type))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Campaign::Table)
                    .if_not_exists()
                    .col(pk_auto(Campaign::Id))
                    .col(string(Campaign::Name))
                    .col(integer(Campaign::Years))
                    .col(integer_null(Campaign::ExpansionId))
                    .foreign_key(&mut cascade(
                        "fk_campaign_expansion_id",
                        Campaign::Table,
                        Campaign::ExpansionId,
                        ExpansionType::Table,
                        ExpansionType::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Monster::Table)
                    .if_not_exists()
                    .col(pk_auto(Monster::Id))
                    .col(string(Monster::Name))
                    .col(boolean(Monster::Nemesis).default(false))
                    .col(integer_null(Monster::ExpansionId))
                    .foreign_key(&mut cascade(
                        "fk_monster_expansion_id",
                        Monster::Table,
                        Monster::ExpansionId,
                        ExpansionType::Table,
                        ExpansionType::Id,
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Monster::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Campaign::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MilestoneType::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResourceType::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExpansionType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExpansionType {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum ResourceType {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum MilestoneType {
    Table,
    Id,
    Type,
}

#[derive(DeriveIden)]
pub enum Campaign {
    Table,
    Id,
    Name,
    Years,
    ExpansionId,
}

#[derive(DeriveIden)]
pub enum Monster {
    Table,
    Id,
    Name,
    Nemesis,
    ExpansionId,
}
