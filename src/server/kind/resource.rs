//! Resource cards.

use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DatabaseTransaction, DbErr};

use crate::{
    model::catalog::{ResourceDto, ResourcePayload},
    server::{
        data::{
            filter::FilterRule,
            reference::{ids, pick, pick_optional, require, require_optional, Reference},
        },
        error::AppError,
        kind::{
            filters::{expansion_rules, resource_type_rules},
            key, persist, ColumnOf, EntityKind, ModelOf,
        },
    },
};

pub struct Resources;

#[async_trait]
impl EntityKind for Resources {
    type Entity = entity::resource::Entity;
    type Payload = ResourcePayload;
    type Dto = ResourceDto;

    const PATH: &'static str = "resources";
    const LABEL: &'static str = "resource";
    const ID: ColumnOf<Self> = entity::resource::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    /// Expansion and type toggles, monster origin, and the four card flags.
    fn filters() -> Vec<FilterRule<ColumnOf<Self>>> {
        use entity::resource::Column;

        let mut rules = expansion_rules(Column::ExpansionId);
        rules.extend(resource_type_rules(Column::TypeId));
        rules.push(FilterRule::presence("monster", Column::MonsterId));
        rules.push(FilterRule::flag("strange", Column::Strange));
        rules.push(FilterRule::flag("indomitable", Column::Indomitable));
        rules.push(FilterRule::flag("consumable", Column::Consumable));
        rules.push(FilterRule::flag("vermin", Column::Vermin));
        rules
    }

    async fn render(
        db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<ResourceDto>, DbErr> {
        let types =
            entity::resource_type::Entity::load(db, ids(&models, |m| Some(m.type_id))).await?;
        let monsters =
            entity::monster::Entity::load(db, ids(&models, |m| m.monster_id)).await?;
        let expansions =
            entity::expansion_type::Entity::load(db, ids(&models, |m| m.expansion_id)).await?;

        models
            .into_iter()
            .map(|model| {
                Ok(ResourceDto {
                    id: model.id,
                    name: model.name,
                    resource_type: pick(&types, model.type_id, "type")?,
                    monster: pick_optional(&monsters, model.monster_id, "monster")?,
                    expansion: pick_optional(&expansions, model.expansion_id, "expansion")?,
                    strange: model.strange,
                    indomitable: model.indomitable,
                    consumable: model.consumable,
                    vermin: model.vermin,
                })
            })
            .collect()
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: ResourcePayload,
    ) -> Result<ModelOf<Self>, AppError> {
        require::<entity::resource_type::Entity, _>(txn, "type", payload.resource_type).await?;
        require_optional::<entity::monster::Entity, _>(txn, "monster", payload.monster).await?;
        require_optional::<entity::expansion_type::Entity, _>(txn, "expansion", payload.expansion)
            .await?;

        let row = entity::resource::ActiveModel {
            id: key(existing.as_ref().map(|model| model.id)),
            name: ActiveValue::Set(payload.name),
            type_id: ActiveValue::Set(payload.resource_type),
            monster_id: ActiveValue::Set(payload.monster),
            expansion_id: ActiveValue::Set(payload.expansion),
            strange: ActiveValue::Set(payload.strange),
            indomitable: ActiveValue::Set(payload.indomitable),
            consumable: ActiveValue::Set(payload.consumable),
            vermin: ActiveValue::Set(payload.vermin),
        };

        Ok(persist(txn, row, existing.is_some()).await?)
    }
}
