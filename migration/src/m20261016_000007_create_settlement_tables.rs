use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261016_000002_create_player_table::Player,
    m20261016_000003_create_catalog_tables::MilestoneType,
    m20261016_000005_create_resource_table::Resource,
    m20261016_000006_create_event_table::Event,
};
use crate::cascade;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Settlement::Table)
                    .if_not_exists()
                    .col(pk_auto(Settlement::Id))
                    .col(string(Settlement::Name))
                    .col(integer(Settlement::SurvivalLimit))
                    .col(integer(Settlement::Population))
                    .col(integer(Settlement::GameMasterId))
                    .foreign_key(&mut cascade(
                        "fk_settlement_game_master_id",
                        Settlement::Table,
                        Settlement::GameMasterId,
                        Player::Table,
                        Player::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SettlementEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(SettlementEvent::Id))
                    .col(integer(SettlementEvent::SettlementId))
                    .col(integer(SettlementEvent::EventId))
                    .col(integer(SettlementEvent::Year))
                    .foreign_key(&mut cascade(
                        "fk_settlement_event_settlement_id",
                        SettlementEvent::Table,
                        SettlementEvent::SettlementId,
                        Settlement::Table,
                        Settlement::Id,
                    ))
                    .foreign_key(&mut cascade(
                        "fk_settlement_event_event_id",
                        SettlementEvent::Table,
                        SettlementEvent::EventId,
                        Event::Table,
                        Event::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SettlementInventory::Table)
                    .if_not_exists()
                    .col(pk_auto(SettlementInventory::Id))
                    .col(integer(SettlementInventory::SettlementId))
                    .col(integer(SettlementInventory::ResourceId))
                    .col(integer(SettlementInventory::Amount))
                    .foreign_key(&mut cascade(
                        "fk_settlement_inventory_settlement_id",
                        SettlementInventory::Table,
                        SettlementInventory::SettlementId,
                        Settlement::Table,
                        Settlement::Id,
                    ))
                    .foreign_key(&mut cascade(
                        "fk_settlement_inventory_resource_id",
                        SettlementInventory::Table,
                        SettlementInventory::ResourceId,
                        Resource::Table,
                        Resource::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Milestone::Table)
                    .if_not_exists()
                    .col(pk_auto(Milestone::Id))
                    .col(integer(Milestone::SettlementId))
                    .col(integer(Milestone::MilestoneTypeId))
                    .col(boolean(Milestone::Achieved).default(false))
                    .foreign_key(&mut cascade(
                        "fk_milestone_settlement_id",
                        Milestone::Table,
                        Milestone::SettlementId,
                        Settlement::Table,
                        Settlement::Id,
                    ))
                    .foreign_key(&mut cascade(
                        "fk_milestone_milestone_type_id",
                        Milestone::Table,
                        Milestone::MilestoneTypeId,
                        MilestoneType::Table,
                        MilestoneType::Id,
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Milestone::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SettlementInventory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SettlementEvent::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Settlement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Settlement {
    Table,
    Id,
    Name,
    SurvivalLimit,
    Population,
    GameMasterId,
}

#[derive(DeriveIden)]
pub enum SettlementEvent {
    Table,
    Id,
    SettlementId,
    EventId,
    Year,
}

#[derive(DeriveIden)]
pub enum SettlementInventory {
    Table,
    Id,
    SettlementId,
    ResourceId,
    Amount,
}

#[derive(DeriveIden)]
pub enum Milestone {
    Table,
    Id,
    SettlementId,
    MilestoneTypeId,
    Achieved,
}
