use sea_orm_migration::{prelude::*, schema::*};

use super::m20261016_000003_create_catalog_tables::{Campaign, ExpansionType};
use crate::cascade;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Name))
                    .col(text(Event::Effect))
                    .col(boolean(Event::Story).default(false))
                    .col(integer_null(Event::CampaignId))
                    .col(integer_null(Event::ExpansionId))
                    .foreign_key(&mut cascade(
                        "fk_event_campaign_id",
                        Event::Table,
                        Event::CampaignId,
                        Campaign::Table,
                        Campaign::Id,
                    ))
                    .foreign_key(&mut cascade(
                        "fk_event_expansion_id",
                        Event::Table,
                        Event::ExpansionId,
                        ExpansionType::Table,
                        ExpansionType::Id,
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Name,
    Effect,
    Story,
    CampaignId,
    ExpansionId,
}
