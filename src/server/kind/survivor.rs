//! Survivors and proficiency levels.
//!
//! A survivor's four card sets live in join tables. They are rewritten in full on every
//! store, inside the same transaction as the survivor row.

use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DatabaseTransaction, DbErr};

use crate::{
    model::campaign::{
        ProficiencyLevelDto, ProficiencyLevelPayload, SurvivorDto, SurvivorPayload, SurvivorSheet,
    },
    server::{
        data::{
            filter::{CallerScope, FilterRule, MatchKind},
            link::{load_links, replace_links},
            reference::{
                ids, linked_ids, pick, pick_all, pick_optional, require, require_all,
                require_optional, Reference,
            },
        },
        error::AppError,
        kind::{key, persist, ColumnOf, EntityKind, ModelOf},
    },
};

pub struct Survivors;

#[async_trait]
impl EntityKind for Survivors {
    type Entity = entity::survivor::Entity;
    type Payload = SurvivorPayload;
    type Dto = SurvivorDto;

    const PATH: &'static str = "survivors";
    const LABEL: &'static str = "survivor";
    const ID: ColumnOf<Self> = entity::survivor::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    fn filters() -> Vec<FilterRule<ColumnOf<Self>>> {
        vec![
            FilterRule::matching("user", entity::survivor::Column::PlayerId, MatchKind::Int),
            FilterRule::caller(
                "current",
                entity::survivor::Column::PlayerId,
                CallerScope::Player,
            ),
        ]
    }

    async fn render(
        db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<SurvivorDto>, DbErr> {
        let survivor_ids: Vec<i32> = models.iter().map(|m| m.id).collect();

        let players =
            entity::player::Entity::load(db, ids(&models, |m| Some(m.player_id))).await?;

        let proficiency_links = load_links::<entity::survivor_weapon_proficiency::Entity, _>(
            db,
            entity::survivor_weapon_proficiency::Column::SurvivorId,
            entity::survivor_weapon_proficiency::Column::WeaponProficiencyId,
            survivor_ids.clone(),
        )
        .await?;
        let art_links = load_links::<entity::survivor_fighting_art::Entity, _>(
            db,
            entity::survivor_fighting_art::Column::SurvivorId,
            entity::survivor_fighting_art::Column::FightingArtId,
            survivor_ids.clone(),
        )
        .await?;
        let disorder_links = load_links::<entity::survivor_disorder::Entity, _>(
            db,
            entity::survivor_disorder::Column::SurvivorId,
            entity::survivor_disorder::Column::DisorderId,
            survivor_ids.clone(),
        )
        .await?;
        let ability_links = load_links::<entity::survivor_ability::Entity, _>(
            db,
            entity::survivor_ability::Column::SurvivorId,
            entity::survivor_ability::Column::AbilityId,
            survivor_ids,
        )
        .await?;

        let proficiencies =
            entity::weapon_proficiency::Entity::load(db, linked_ids(&proficiency_links)).await?;
        let arts = entity::fighting_art::Entity::load(db, linked_ids(&art_links)).await?;
        let disorders = entity::disorder::Entity::load(db, linked_ids(&disorder_links)).await?;
        let abilities = entity::ability::Entity::load(db, linked_ids(&ability_links)).await?;

        models
            .into_iter()
            .map(|model| {
                let id = model.id;
                Ok(SurvivorDto {
                    id,
                    user: pick(&players, model.player_id, "user")?,
                    weapon_proficiency: pick_all(
                        &proficiencies,
                        proficiency_links.get(&id),
                        "weapon_proficiency",
                    )?,
                    fighting_art: pick_all(&arts, art_links.get(&id), "fighting_art")?,
                    disorder: pick_all(&disorders, disorder_links.get(&id), "disorder")?,
                    ability: pick_all(&abilities, ability_links.get(&id), "ability")?,
                    sheet: sheet_of(model),
                })
            })
            .collect()
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: SurvivorPayload,
    ) -> Result<ModelOf<Self>, AppError> {
        require::<entity::player::Entity, _>(txn, "user", payload.user).await?;
        let proficiencies = require_all::<entity::weapon_proficiency::Entity, _>(
            txn,
            "weapon_proficiency",
            payload.weapon_proficiency,
        )
        .await?;
        let arts =
            require_all::<entity::fighting_art::Entity, _>(txn, "fighting_art", payload.fighting_art)
                .await?;
        let disorders =
            require_all::<entity::disorder::Entity, _>(txn, "disorder", payload.disorder).await?;
        let abilities =
            require_all::<entity::ability::Entity, _>(txn, "ability", payload.ability).await?;

        let row = sheet_row(
            key(existing.as_ref().map(|model| model.id)),
            payload.user,
            payload.sheet,
        );
        let survivor = persist(txn, row, existing.is_some()).await?;
        let owner = survivor.id;

        replace_links::<entity::survivor_weapon_proficiency::Entity, _, _>(
            txn,
            entity::survivor_weapon_proficiency::Column::SurvivorId,
            owner,
            proficiencies
                .into_iter()
                .map(|id| entity::survivor_weapon_proficiency::ActiveModel {
                    survivor_id: ActiveValue::Set(owner),
                    weapon_proficiency_id: ActiveValue::Set(id),
                })
                .collect(),
        )
        .await?;
        replace_links::<entity::survivor_fighting_art::Entity, _, _>(
            txn,
            entity::survivor_fighting_art::Column::SurvivorId,
            owner,
            arts.into_iter()
                .map(|id| entity::survivor_fighting_art::ActiveModel {
                    survivor_id: ActiveValue::Set(owner),
                    fighting_art_id: ActiveValue::Set(id),
                })
                .collect(),
        )
        .await?;
        replace_links::<entity::survivor_disorder::Entity, _, _>(
            txn,
            entity::survivor_disorder::Column::SurvivorId,
            owner,
            disorders
                .into_iter()
                .map(|id| entity::survivor_disorder::ActiveModel {
                    survivor_id: ActiveValue::Set(owner),
                    disorder_id: ActiveValue::Set(id),
                })
                .collect(),
        )
        .await?;
        replace_links::<entity::survivor_ability::Entity, _, _>(
            txn,
            entity::survivor_ability::Column::SurvivorId,
            owner,
            abilities
                .into_iter()
                .map(|id| entity::survivor_ability::ActiveModel {
                    survivor_id: ActiveValue::Set(owner),
                    ability_id: ActiveValue::Set(id),
                })
                .collect(),
        )
        .await?;

        Ok(survivor)
    }
}

fn sheet_of(model: entity::survivor::Model) -> SurvivorSheet {
    SurvivorSheet {
        name: model.name,
        survival: model.survival,
        insanity: model.insanity,
        hunt_experience: model.hunt_experience,
        gender: model.gender,
        movement: model.movement,
        accuracy: model.accuracy,
        strength: model.strength,
        evasion: model.evasion,
        speed: model.speed,
        luck: model.luck,
        understanding: model.understanding,
        courage: model.courage,
        head_armor: model.head_armor,
        head_wound: model.head_wound,
        arm_armor: model.arm_armor,
        arm_light_wound: model.arm_light_wound,
        arm_heavy_wound: model.arm_heavy_wound,
        body_armor: model.body_armor,
        body_light_wound: model.body_light_wound,
        body_heavy_wound: model.body_heavy_wound,
        waist_armor: model.waist_armor,
        waist_light_wound: model.waist_light_wound,
        waist_heavy_wound: model.waist_heavy_wound,
        leg_armor: model.leg_armor,
        leg_light_wound: model.leg_light_wound,
        leg_heavy_wound: model.leg_heavy_wound,
    }
}

fn sheet_row(
    id: ActiveValue<i32>,
    player_id: i32,
    sheet: SurvivorSheet,
) -> entity::survivor::ActiveModel {
    entity::survivor::ActiveModel {
        id,
        player_id: ActiveValue::Set(player_id),
        name: ActiveValue::Set(sheet.name),
        survival: ActiveValue::Set(sheet.survival),
        insanity: ActiveValue::Set(sheet.insanity),
        hunt_experience: ActiveValue::Set(sheet.hunt_experience),
        gender: ActiveValue::Set(sheet.gender),
        movement: ActiveValue::Set(sheet.movement),
        accuracy: ActiveValue::Set(sheet.accuracy),
        strength: ActiveValue::Set(sheet.strength),
        evasion: ActiveValue::Set(sheet.evasion),
        speed: ActiveValue::Set(sheet.speed),
        luck: ActiveValue::Set(sheet.luck),
        understanding: ActiveValue::Set(sheet.understanding),
        courage: ActiveValue::Set(sheet.courage),
        head_armor: ActiveValue::Set(sheet.head_armor),
        head_wound: ActiveValue::Set(sheet.head_wound),
        arm_armor: ActiveValue::Set(sheet.arm_armor),
        arm_light_wound: ActiveValue::Set(sheet.arm_light_wound),
        arm_heavy_wound: ActiveValue::Set(sheet.arm_heavy_wound),
        body_armor: ActiveValue::Set(sheet.body_armor),
        body_light_wound: ActiveValue::Set(sheet.body_light_wound),
        body_heavy_wound: ActiveValue::Set(sheet.body_heavy_wound),
        waist_armor: ActiveValue::Set(sheet.waist_armor),
        waist_light_wound: ActiveValue::Set(sheet.waist_light_wound),
        waist_heavy_wound: ActiveValue::Set(sheet.waist_heavy_wound),
        leg_armor: ActiveValue::Set(sheet.leg_armor),
        leg_light_wound: ActiveValue::Set(sheet.leg_light_wound),
        leg_heavy_wound: ActiveValue::Set(sheet.leg_heavy_wound),
    }
}

pub struct ProficiencyLevels;

#[async_trait]
impl EntityKind for ProficiencyLevels {
    type Entity = entity::proficiency_level::Entity;
    type Payload = ProficiencyLevelPayload;
    type Dto = ProficiencyLevelDto;

    const PATH: &'static str = "proficiency_levels";
    const LABEL: &'static str = "proficiency level";
    const ID: ColumnOf<Self> = entity::proficiency_level::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    fn filters() -> Vec<FilterRule<ColumnOf<Self>>> {
        vec![FilterRule::matching(
            "survivor",
            entity::proficiency_level::Column::SurvivorId,
            MatchKind::Int,
        )]
    }

    async fn render(
        db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<ProficiencyLevelDto>, DbErr> {
        let weapon_types =
            entity::weapon_proficiency::Entity::load(db, ids(&models, |m| m.weapon_type_id))
                .await?;
        let survivors =
            entity::survivor::Entity::load(db, ids(&models, |m| m.survivor_id)).await?;

        models
            .into_iter()
            .map(|model| {
                Ok(ProficiencyLevelDto {
                    id: model.id,
                    name: model.name,
                    level: model.level,
                    weapon_type: pick_optional(&weapon_types, model.weapon_type_id, "weapon_type")?,
                    survivor: pick_optional(&survivors, model.survivor_id, "survivor")?,
                })
            })
            .collect()
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: ProficiencyLevelPayload,
    ) -> Result<ModelOf<Self>, AppError> {
        require_optional::<entity::weapon_proficiency::Entity, _>(
            txn,
            "weapon_type",
            payload.weapon_type,
        )
        .await?;
        require_optional::<entity::survivor::Entity, _>(txn, "survivor", payload.survivor).await?;

        let row = entity::proficiency_level::ActiveModel {
            id: key(existing.as_ref().map(|model| model.id)),
            name: ActiveValue::Set(payload.name),
            level: ActiveValue::Set(payload.level),
            weapon_type_id: ActiveValue::Set(payload.weapon_type),
            survivor_id: ActiveValue::Set(payload.survivor),
        };

        Ok(persist(txn, row, existing.is_some()).await?)
    }
}
