//! Events, and the events a settlement has drawn.

use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DatabaseTransaction, DbErr};

use crate::{
    model::{
        campaign::{SettlementEventDto, SettlementEventPayload},
        catalog::{EventDto, EventPayload},
    },
    server::{
        data::{
            filter::{FilterRule, MatchKind},
            reference::{ids, pick, pick_optional, require, require_optional, Reference},
        },
        error::AppError,
        kind::{filters::expansion_rules, key, persist, ColumnOf, EntityKind, ModelOf},
    },
};

pub struct Events;

#[async_trait]
impl EntityKind for Events {
    type Entity = entity::event::Entity;
    type Payload = EventPayload;
    type Dto = EventDto;

    const PATH: &'static str = "events";
    const LABEL: &'static str = "event";
    const ID: ColumnOf<Self> = entity::event::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    fn filters() -> Vec<FilterRule<ColumnOf<Self>>> {
        let mut rules = expansion_rules(entity::event::Column::ExpansionId);
        rules.push(FilterRule::flag("story", entity::event::Column::Story));
        rules
    }

    async fn render(
        db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<EventDto>, DbErr> {
        let campaigns =
            entity::campaign::Entity::load(db, ids(&models, |m| m.campaign_id)).await?;
        let expansions =
            entity::expansion_type::Entity::load(db, ids(&models, |m| m.expansion_id)).await?;

        models
            .into_iter()
            .map(|model| {
                Ok(EventDto {
                    id: model.id,
                    name: model.name,
                    effect: model.effect,
                    story: model.story,
                    campaign: pick_optional(&campaigns, model.campaign_id, "campaign")?,
                    expansion: pick_optional(&expansions, model.expansion_id, "expansion")?,
                })
            })
            .collect()
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: EventPayload,
    ) -> Result<ModelOf<Self>, AppError> {
        require_optional::<entity::campaign::Entity, _>(txn, "campaign", payload.campaign).await?;
        require_optional::<entity::expansion_type::Entity, _>(txn, "expansion", payload.expansion)
            .await?;

        let row = entity::event::ActiveModel {
            id: key(existing.as_ref().map(|model| model.id)),
            name: ActiveValue::Set(payload.name),
            effect: ActiveValue::Set(payload.effect),
            story: ActiveValue::Set(payload.story),
            campaign_id: ActiveValue::Set(payload.campaign),
            expansion_id: ActiveValue::Set(payload.expansion),
        };

        Ok(persist(txn, row, existing.is_some()).await?)
    }
}

pub struct SettlementEvents;

#[async_trait]
impl EntityKind for SettlementEvents {
    type Entity = entity::settlement_event::Entity;
    type Payload = SettlementEventPayload;
    type Dto = SettlementEventDto;

    const PATH: &'static str = "settlement_events";
    const LABEL: &'static str = "settlement event";
    const ID: ColumnOf<Self> = entity::settlement_event::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    fn filters() -> Vec<FilterRule<ColumnOf<Self>>> {
        vec![FilterRule::matching(
            "settlement",
            entity::settlement_event::Column::SettlementId,
            MatchKind::Int,
        )]
    }

    async fn render(
        db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<SettlementEventDto>, DbErr> {
        let events = entity::event::Entity::load(db, ids(&models, |m| Some(m.event_id))).await?;

        models
            .into_iter()
            .map(|model| {
                Ok(SettlementEventDto {
                    id: model.id,
                    settlement: model.settlement_id,
                    event: pick(&events, model.event_id, "event")?,
                    year: model.year,
                })
            })
            .collect()
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: SettlementEventPayload,
    ) -> Result<ModelOf<Self>, AppError> {
        require::<entity::settlement::Entity, _>(txn, "settlement", payload.settlement).await?;
        require::<entity::event::Entity, _>(txn, "event", payload.event).await?;

        let row = entity::settlement_event::ActiveModel {
            id: key(existing.as_ref().map(|model| model.id)),
            settlement_id: ActiveValue::Set(payload.settlement),
            event_id: ActiveValue::Set(payload.event),
            year: ActiveValue::Set(payload.year),
        };

        Ok(persist(txn, row, existing.is_some()).await?)
    }
}
