//! Survivor card kinds. All four filter by expansion.

use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DatabaseTransaction, DbErr};

use crate::{
    model::catalog::{
        CardDto, CardPayload, DisorderDto, DisorderPayload, WeaponProficiencyDto,
        WeaponProficiencyPayload,
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

pub struct Abilities;

#[async_trait]
impl EntityKind for Abilities {
    type Entity = entity::ability::Entity;
    type Payload = CardPayload;
    type Dto = CardDto;

    const PATH: &'static str = "abilities";
    const LABEL: &'static str = "ability";
    const ID: ColumnOf<Self> = entity::ability::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    fn filters() -> Vec<FilterRule<ColumnOf<Self>>> {
        expansion_rules(entity::ability::Column::ExpansionId)
    }

    async fn render(
        db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<CardDto>, DbErr> {
        let expansions =
            entity::expansion_type::Entity::load(db, ids(&models, |m| m.expansion_id)).await?;

        models
            .into_iter()
            .map(|model| {
                Ok(CardDto {
                    id: model.id,
                    name: model.name,
                    effect: model.effect,
                    expansion: pick_optional(&expansions, model.expansion_id, "expansion")?,
                })
            })
            .collect()
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: CardPayload,
    ) -> Result<ModelOf<Self>, AppError> {
        require_optional::<entity::expansion_type::Entity, _>(txn, "expansion", payload.expansion)
            .await?;

        let row = entity::ability::ActiveModel {
            id: key(existing.as_ref().map(|model| model.id)),
            name: ActiveValue::Set(payload.name),
            effect: ActiveValue::Set(payload.effect),
            expansion_id: ActiveValue::Set(payload.expansion),
        };

        Ok(persist(txn, row, existing.is_some()).await?)
    }
}

pub struct FightingArts;

#[async_trait]
impl EntityKind for FightingArts {
    type Entity = entity::fighting_art::Entity;
    type Payload = CardPayload;
    type Dto = CardDto;

    const PATH: &'static str = "fighting_arts";
    const LABEL: &'static str = "fighting art";
    const ID: ColumnOf<Self> = entity::fighting_art::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    fn filters() -> Vec<FilterRule<ColumnOf<Self>>> {
        expansion_rules(entity::fighting_art::Column::ExpansionId)
    }

    async fn render(
        db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<CardDto>, DbErr> {
        let expansions =
            entity::expansion_type::Entity::load(db, ids(&models, |m| m.expansion_id)).await?;

        models
            .into_iter()
            .map(|model| {
                Ok(CardDto {
                    id: model.id,
                    name: model.name,
                    effect: model.effect,
                    expansion: pick_optional(&expansions, model.expansion_id, "expansion")?,
                })
            })
            .collect()
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: CardPayload,
    ) -> Result<ModelOf<Self>, AppError> {
        require_optional::<entity::expansion_type::Entity, _>(txn, "expansion", payload.expansion)
            .await?;

        let row = entity::fighting_art::ActiveModel {
            id: key(existing.as_ref().map(|model| model.id)),
            name: ActiveValue::Set(payload.name),
            effect: ActiveValue::Set(payload.effect),
            expansion_id: ActiveValue::Set(payload.expansion),
        };

        Ok(persist(txn, row, existing.is_some()).await?)
    }
}

pub struct Disorders;

#[async_trait]
impl EntityKind for Disorders {
    type Entity = entity::disorder::Entity;
    type Payload = DisorderPayload;
    type Dto = DisorderDto;

    const PATH: &'static str = "disorders";
    const LABEL: &'static str = "disorder";
    const ID: ColumnOf<Self> = entity::disorder::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    fn filters() -> Vec<FilterRule<ColumnOf<Self>>> {
        expansion_rules(entity::disorder::Column::ExpansionId)
    }

    async fn render(
        db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<DisorderDto>, DbErr> {
        let expansions =
            entity::expansion_type::Entity::load(db, ids(&models, |m| m.expansion_id)).await?;

        models
            .into_iter()
            .map(|model| {
                Ok(DisorderDto {
                    id: model.id,
                    name: model.name,
                    flavor_text: model.flavor_text,
                    effect: model.effect,
                    expansion: pick_optional(&expansions, model.expansion_id, "expansion")?,
                })
            })
            .collect()
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: DisorderPayload,
    ) -> Result<ModelOf<Self>, AppError> {
        require_optional::<entity::expansion_type::Entity, _>(txn, "expansion", payload.expansion)
            .await?;

        let row = entity::disorder::ActiveModel {
            id: key(existing.as_ref().map(|model| model.id)),
            name: ActiveValue::Set(payload.name),
            flavor_text: ActiveValue::Set(payload.flavor_text),
            effect: ActiveValue::Set(payload.effect),
            expansion_id: ActiveValue::Set(payload.expansion),
        };

        Ok(persist(txn, row, existing.is_some()).await?)
    }
}

pub struct WeaponProficiencies;

#[async_trait]
impl EntityKind for WeaponProficiencies {
    type Entity = entity::weapon_proficiency::Entity;
    type Payload = WeaponProficiencyPayload;
    type Dto = WeaponProficiencyDto;

    const PATH: &'static str = "weapon_proficiencies";
    const LABEL: &'static str = "weapon proficiency";
    const ID: ColumnOf<Self> = entity::weapon_proficiency::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    fn filters() -> Vec<FilterRule<ColumnOf<Self>>> {
        expansion_rules(entity::weapon_proficiency::Column::ExpansionId)
    }

    async fn render(
        db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<WeaponProficiencyDto>, DbErr> {
        let expansions =
            entity::expansion_type::Entity::load(db, ids(&models, |m| m.expansion_id)).await?;

        models
            .into_iter()
            .map(|model| {
                Ok(WeaponProficiencyDto {
                    id: model.id,
                    name: model.name,
                    specialist_effect: model.specialist_effect,
                    master_effect: model.master_effect,
                    expansion: pick_optional(&expansions, model.expansion_id, "expansion")?,
                })
            })
            .collect()
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: WeaponProficiencyPayload,
    ) -> Result<ModelOf<Self>, AppError> {
        require_optional::<entity::expansion_type::Entity, _>(txn, "expansion", payload.expansion)
            .await?;

        let row = entity::weapon_proficiency::ActiveModel {
            id: key(existing.as_ref().map(|model| model.id)),
            name: ActiveValue::Set(payload.name),
            specialist_effect: ActiveValue::Set(payload.specialist_effect),
            master_effect: ActiveValue::Set(payload.master_effect),
            expansion_id: ActiveValue::Set(payload.expansion),
        };

        Ok(persist(txn, row, existing.is_some()).await?)
    }
}
