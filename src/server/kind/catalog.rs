//! Lookup kinds: expansions, resource types, milestone types, campaigns and monsters.

use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DatabaseTransaction, DbErr};

use crate::{
    model::{
        catalog::{
            CampaignDto, CampaignPayload, MilestoneTypePayload, MonsterDto, MonsterPayload,
            NamedPayload,
        },
        reference::{MilestoneTypeDto, NamedDto},
    },
    server::{
        data::{
            filter::FilterRule,
            reference::{ids, pick_optional, require_optional, Reference},
        },
        error::AppError,
        kind::{filters::expansion_rules, key, persist, ColumnOf, EntityKind, ModelOf},
    },
};

pub struct ExpansionTypes;

#[async_trait]
impl EntityKind for ExpansionTypes {
    type Entity = entity::expansion_type::Entity;
    type Payload = NamedPayload;
    type Dto = NamedDto;

    const PATH: &'static str = "expansion_types";
    const LABEL: &'static str = "expansion type";
    const ID: ColumnOf<Self> = entity::expansion_type::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    async fn render(
        _db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<NamedDto>, DbErr> {
        Ok(models
            .into_iter()
            .map(|model| NamedDto {
                id: model.id,
                name: model.name,
            })
            .collect())
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: NamedPayload,
    ) -> Result<ModelOf<Self>, AppError> {
        let row = entity::expansion_type::ActiveModel {
            id: key(existing.as_ref().map(|model| model.id)),
            name: ActiveValue::Set(payload.name),
        };

        Ok(persist(txn, row, existing.is_some()).await?)
    }
}

pub struct ResourceTypes;

#[async_trait]
impl EntityKind for ResourceTypes {
    type Entity = entity::resource_type::Entity;
    type Payload = NamedPayload;
    type Dto = NamedDto;

    const PATH: &'static str = "resource_types";
    const LABEL: &'static str = "resource type";
    const ID: ColumnOf<Self> = entity::resource_type::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    async fn render(
        _db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<NamedDto>, DbErr> {
        Ok(models
            .into_iter()
            .map(|model| NamedDto {
                id: model.id,
                name: model.name,
            })
            .collect())
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: NamedPayload,
    ) -> Result<ModelOf<Self>, AppError> {
        let row = entity::resource_type::ActiveModel {
            id: key(existing.as_ref().map(|model| model.id)),
            name: ActiveValue::Set(payload.name),
        };

        Ok(persist(txn, row, existing.is_some()).await?)
    }
}

pub struct MilestoneTypes;

#[async_trait]
impl EntityKind for MilestoneTypes {
    type Entity = entity::milestone_type::Entity;
    type Payload = MilestoneTypePayload;
    type Dto = MilestoneTypeDto;

    const PATH: &'static str = "milestone_types";
    const LABEL: &'static str = "milestone type";
    const ID: ColumnOf<Self> = entity::milestone_type::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    async fn render(
        _db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<MilestoneTypeDto>, DbErr> {
        Ok(models
            .into_iter()
            .map(|model| MilestoneTypeDto {
                id: model.id,
                label: model.label,
            })
            .collect())
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: MilestoneTypePayload,
    ) -> Result<ModelOf<Self>, AppError> {
        let row = entity::milestone_type::ActiveModel {
            id: key(existing.as_ref().map(|model| model.id)),
            label: ActiveValue::Set(payload.label),
        };

        Ok(persist(txn, row, existing.is_some()).await?)
    }
}

pub struct Campaigns;

#[async_trait]
impl EntityKind for Campaigns {
    type Entity = entity::campaign::Entity;
    type Payload = CampaignPayload;
    type Dto = CampaignDto;

    const PATH: &'static str = "campaigns";
    const LABEL: &'static str = "campaign";
    const ID: ColumnOf<Self> = entity::campaign::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    fn filters() -> Vec<FilterRule<ColumnOf<Self>>> {
        expansion_rules(entity::campaign::Column::ExpansionId)
    }

    async fn render(
        db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<CampaignDto>, DbErr> {
        let expansions =
            entity::expansion_type::Entity::load(db, ids(&models, |m| m.expansion_id)).await?;

        models
            .into_iter()
            .map(|model| {
                Ok(CampaignDto {
                    id: model.id,
                    name: model.name,
                    years: model.years,
                    expansion: pick_optional(&expansions, model.expansion_id, "expansion")?,
                })
            })
            .collect()
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: CampaignPayload,
    ) -> Result<ModelOf<Self>, AppError> {
        require_optional::<entity::expansion_type::Entity, _>(txn, "expansion", payload.expansion)
            .await?;

        let row = entity::campaign::ActiveModel {
            id: key(existing.as_ref().map(|model| model.id)),
            name: ActiveValue::Set(payload.name),
            years: ActiveValue::Set(payload.years),
            expansion_id: ActiveValue::Set(payload.expansion),
        };

        Ok(persist(txn, row, existing.is_some()).await?)
    }
}

pub struct Monsters;

#[async_trait]
impl EntityKind for Monsters {
    type Entity = entity::monster::Entity;
    type Payload = MonsterPayload;
    type Dto = MonsterDto;

    const PATH: &'static str = "monsters";
    const LABEL: &'static str = "monster";
    const ID: ColumnOf<Self> = entity::monster::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    fn filters() -> Vec<FilterRule<ColumnOf<Self>>> {
        let mut rules = expansion_rules(entity::monster::Column::ExpansionId);
        rules.push(FilterRule::flag("nemesis", entity::monster::Column::Nemesis));
        rules
    }

    async fn render(
        db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<MonsterDto>, DbErr> {
        let expansions =
            entity::expansion_type::Entity::load(db, ids(&models, |m| m.expansion_id)).await?;

        models
            .into_iter()
            .map(|model| {
                Ok(MonsterDto {
                    id: model.id,
                    name: model.name,
                    nemesis: model.nemesis,
                    expansion: pick_optional(&expansions, model.expansion_id, "expansion")?,
                })
            })
            .collect()
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: MonsterPayload,
    ) -> Result<ModelOf<Self>, AppError> {
        require_optional::<entity::expansion_type::Entity, _>(txn, "expansion", payload.expansion)
            .await?;

        let row = entity::monster::ActiveModel {
            id: key(existing.as_ref().map(|model| model.id)),
            name: ActiveValue::Set(payload.name),
            nemesis: ActiveValue::Set(payload.nemesis),
            expansion_id: ActiveValue::Set(payload.expansion),
        };

        Ok(persist(txn, row, existing.is_some()).await?)
    }
}
