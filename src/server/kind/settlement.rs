//! Settlements and the records kept against them.

use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DatabaseTransaction, DbErr};

use crate::{
    model::campaign::{
        MilestoneDto, MilestonePayload, SettlementDto, SettlementInventoryDto,
        SettlementInventoryPayload, SettlementPayload,
    },
    server::{
        data::{
            filter::{FilterRule, MatchKind},
            reference::{ids, pick, require, Reference},
        },
        error::AppError,
        kind::{key, persist, ColumnOf, EntityKind, ModelOf},
    },
};

pub struct Settlements;

#[async_trait]
impl EntityKind for Settlements {
    type Entity = entity::settlement::Entity;
    type Payload = SettlementPayload;
    type Dto = SettlementDto;

    const PATH: &'static str = "settlements";
    const LABEL: &'static str = "settlement";
    const ID: ColumnOf<Self> = entity::settlement::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    fn filters() -> Vec<FilterRule<ColumnOf<Self>>> {
        vec![FilterRule::matching(
            "game_master",
            entity::settlement::Column::GameMasterId,
            MatchKind::Int,
        )]
    }

    async fn render(
        db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<SettlementDto>, DbErr> {
        let players =
            entity::player::Entity::load(db, ids(&models, |m| Some(m.game_master_id))).await?;

        models
            .into_iter()
            .map(|model| {
                Ok(SettlementDto {
                    id: model.id,
                    name: model.name,
                    population: model.population,
                    survival_limit: model.survival_limit,
                    game_master: pick(&players, model.game_master_id, "game_master")?,
                })
            })
            .collect()
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: SettlementPayload,
    ) -> Result<ModelOf<Self>, AppError> {
        require::<entity::player::Entity, _>(txn, "game_master", payload.game_master).await?;

        let row = entity::settlement::ActiveModel {
            id: key(existing.as_ref().map(|model| model.id)),
            name: ActiveValue::Set(payload.name),
            survival_limit: ActiveValue::Set(payload.survival_limit),
            population: ActiveValue::Set(payload.population),
            game_master_id: ActiveValue::Set(payload.game_master),
        };

        Ok(persist(txn, row, existing.is_some()).await?)
    }
}

pub struct SettlementInventories;

#[async_trait]
impl EntityKind for SettlementInventories {
    type Entity = entity::settlement_inventory::Entity;
    type Payload = SettlementInventoryPayload;
    type Dto = SettlementInventoryDto;

    const PATH: &'static str = "settlement_inventories";
    const LABEL: &'static str = "settlement inventory";
    const ID: ColumnOf<Self> = entity::settlement_inventory::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    fn filters() -> Vec<FilterRule<ColumnOf<Self>>> {
        vec![FilterRule::matching(
            "settlement",
            entity::settlement_inventory::Column::SettlementId,
            MatchKind::Int,
        )]
    }

    async fn render(
        db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<SettlementInventoryDto>, DbErr> {
        let resources =
            entity::resource::Entity::load(db, ids(&models, |m| Some(m.resource_id))).await?;

        models
            .into_iter()
            .map(|model| {
                Ok(SettlementInventoryDto {
                    id: model.id,
                    settlement: model.settlement_id,
                    resource: pick(&resources, model.resource_id, "resource")?,
                    amount: model.amount,
                })
            })
            .collect()
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: SettlementInventoryPayload,
    ) -> Result<ModelOf<Self>, AppError> {
        require::<entity::settlement::Entity, _>(txn, "settlement", payload.settlement).await?;
        require::<entity::resource::Entity, _>(txn, "resource", payload.resource).await?;

        let row = entity::settlement_inventory::ActiveModel {
            id: key(existing.as_ref().map(|model| model.id)),
            settlement_id: ActiveValue::Set(payload.settlement),
            resource_id: ActiveValue::Set(payload.resource),
            amount: ActiveValue::Set(payload.amount),
        };

        Ok(persist(txn, row, existing.is_some()).await?)
    }
}

/// Milestones a settlement has recorded, achieved or not.
pub struct Milestones;

#[async_trait]
impl EntityKind for Milestones {
    type Entity = entity::milestone::Entity;
    type Payload = MilestonePayload;
    type Dto = MilestoneDto;

    const PATH: &'static str = "milestones";
    const LABEL: &'static str = "milestone";
    const ID: ColumnOf<Self> = entity::milestone::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    fn filters() -> Vec<FilterRule<ColumnOf<Self>>> {
        vec![FilterRule::matching(
            "settlement",
            entity::milestone::Column::SettlementId,
            MatchKind::Int,
        )]
    }

    async fn render(
        db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<MilestoneDto>, DbErr> {
        let types =
            entity::milestone_type::Entity::load(db, ids(&models, |m| Some(m.milestone_type_id)))
                .await?;

        models
            .into_iter()
            .map(|model| {
                Ok(MilestoneDto {
                    id: model.id,
                    settlement: model.settlement_id,
                    milestone_type: pick(&types, model.milestone_type_id, "milestone_type")?,
                    achieved: model.achieved,
                })
            })
            .collect()
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: MilestonePayload,
    ) -> Result<ModelOf<Self>, AppError> {
        require::<entity::settlement::Entity, _>(txn, "settlement", payload.settlement).await?;
        require::<entity::milestone_type::Entity, _>(txn, "milestone_type", payload.milestone_type)
            .await?;

        let row = entity::milestone::ActiveModel {
            id: key(existing.as_ref().map(|model| model.id)),
            settlement_id: ActiveValue::Set(payload.settlement),
            milestone_type_id: ActiveValue::Set(payload.milestone_type),
            achieved: ActiveValue::Set(payload.achieved),
        };

        Ok(persist(txn, row, existing.is_some()).await?)
    }
}
