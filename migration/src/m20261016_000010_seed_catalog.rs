//! Seeds the lookup rows whose ids the list filters rely on.

use sea_orm_migration::prelude::*;

use super::m20261016_000003_create_catalog_tables::{ExpansionType, MilestoneType, ResourceType};

/// Ids 1-12 back the `*_exp` query flags.
const EXPANSIONS: [(i32, &str); 12] = [
    (1, "Dragon King"),
    (2, "Dung Beetle Knight"),
    (3, "Flower Knight"),
    (4, "Gorm"),
    (5, "Lion God"),
    (6, "Lion Knight"),
    (7, "Lonely Tree"),
    (8, "Manhunter"),
    (9, "Slenderman"),
    (10, "Spidicules"),
    (11, "Sunstalker"),
    (12, "Gambler's Chest"),
];

const RESOURCE_TYPES: [(i32, &str); 8] = [
    (1, "Basic"),
    (2, "Bone"),
    (3, "Hide"),
    (4, "Organ"),
    (5, "Scrap"),
    (6, "Iron"),
    (7, "Herb"),
    (8, "Flower"),
];

const MILESTONE_TYPES: [(i32, &str); 5] = [
    (1, "First Child Born"),
    (2, "First Death"),
    (3, "Population Reaches 15"),
    (4, "Innovations Reaches 5"),
    (5, "Population Reaches 0"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut expansions = Query::insert()
            .into_table(ExpansionType::Table)
            .columns([ExpansionType::Id, ExpansionType::Name])
            .to_owned();
        for (id, name) in EXPANSIONS {
            expansions
                .values([id.into(), name.into()])
                .map_err(|e| DbErr::Custom(format!("Invalid expansion seed row: {}", e)))?;
        }
        manager.exec_stmt(expansions).await?;

        let mut resource_types = Query::insert()
            .into_table(ResourceType::Table)
            .columns([ResourceType::Id, ResourceType::Name])
            .to_owned();
        for (id, name) in RESOURCE_TYPES {
            resource_types
                .values([id.into(), name.into()])
                .map_err(|e| DbErr::Custom(format!("Invalid resource type seed row: {}", e)))?;
        }
        manager.exec_stmt(resource_types).await?;

        let mut milestone_types = Query::insert()
            .into_table(MilestoneType::Table)
            .columns([MilestoneType::Id, MilestoneType::Type])
            .to_owned();
        for (id, label) in MILESTONE_TYPES {
            milestone_types
                .values([id.into(), label.into()])
                .map_err(|e| DbErr::Custom(format!("Invalid milestone type seed row: {}", e)))?;
        }
        manager.exec_stmt(milestone_types).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(MilestoneType::Table)
                    .and_where(Expr::col(MilestoneType::Id).lte(5))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(ResourceType::Table)
                    .and_where(Expr::col(ResourceType::Id).lte(8))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(ExpansionType::Table)
                    .and_where(Expr::col(ExpansionType::Id).lte(12))
                    .to_owned(),
            )
            .await
    }
}
