//! Nested references embedded in responses, and resolution of the ids a payload names.
//!
//! A response never embeds a full related row. Foreign keys render through the
//! `Reference` registry below, loaded in one batch per field, so rendering a page of rows
//! costs one query per referenced kind rather than one per row.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PrimaryKeyTrait,
    QueryFilter,
};

use crate::{
    model::reference::{MilestoneTypeDto, NamedDto, PlayerRefDto, ResourceRefDto},
    server::error::AppError,
};

/// An entity that other rows point at, with the nested form used to render the pointer.
#[async_trait]
pub trait Reference: EntityTrait {
    type Ref: Clone + Send;

    /// Loads the nested form of every row in `ids`. Missing rows are absent from the map.
    async fn load(
        db: &DatabaseConnection,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, Self::Ref>, DbErr>;
}

/// Implements `Reference` as `{id, name}` for entities with a `name` column.
macro_rules! named_reference {
    ($($module:ident),+ $(,)?) => {
        $(
            #[async_trait]
            impl Reference for entity::$module::Entity {
                type Ref = NamedDto;

                async fn load(
                    db: &DatabaseConnection,
                    ids: Vec<i32>,
                ) -> Result<HashMap<i32, NamedDto>, DbErr> {
                    if ids.is_empty() {
                        return Ok(HashMap::new());
                    }

                    let rows = Self::find()
                        .filter(entity::$module::Column::Id.is_in(unique(ids)))
                        .all(db)
                        .await?;

                    Ok(rows
                        .into_iter()
                        .map(|row| (row.id, NamedDto { id: row.id, name: row.name }))
                        .collect())
                }
            }
        )+
    };
}

named_reference!(
    ability,
    campaign,
    disorder,
    event,
    expansion_type,
    fighting_art,
    monster,
    resource_type,
    survivor,
    weapon_proficiency,
);

/// Players render as `{id, username}`, the username coming from the account.
#[async_trait]
impl Reference for entity::player::Entity {
    type Ref = PlayerRefDto;

    async fn load(
        db: &DatabaseConnection,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, PlayerRefDto>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = Self::find()
            .find_also_related(entity::account::Entity)
            .filter(entity::player::Column::Id.is_in(unique(ids)))
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(player, account)| {
                account.map(|account| {
                    (
                        player.id,
                        PlayerRefDto {
                            id: player.id,
                            username: account.username,
                        },
                    )
                })
            })
            .collect())
    }
}

#[async_trait]
impl Reference for entity::milestone_type::Entity {
    type Ref = MilestoneTypeDto;

    async fn load(
        db: &DatabaseConnection,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, MilestoneTypeDto>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = Self::find()
            .filter(entity::milestone_type::Column::Id.is_in(unique(ids)))
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                (
                    row.id,
                    MilestoneTypeDto {
                        id: row.id,
                        label: row.label,
                    },
                )
            })
            .collect())
    }
}

/// Resources render with their type expanded, composed from the resource type reference.
#[async_trait]
impl Reference for entity::resource::Entity {
    type Ref = ResourceRefDto;

    async fn load(
        db: &DatabaseConnection,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, ResourceRefDto>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = Self::find()
            .filter(entity::resource::Column::Id.is_in(unique(ids)))
            .all(db)
            .await?;
        let types = entity::resource_type::Entity::load(
            db,
            rows.iter().map(|row| row.type_id).collect(),
        )
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok((
                    row.id,
                    ResourceRefDto {
                        id: row.id,
                        name: row.name,
                        resource_type: pick(&types, row.type_id, "type")?,
                    },
                ))
            })
            .collect()
    }
}

/// Takes the reference for `id` out of a loaded map.
///
/// A miss means a foreign key points at nothing, which the schema forbids, so it is
/// reported as a database error.
pub fn pick<R: Clone>(refs: &HashMap<i32, R>, id: i32, field: &str) -> Result<R, DbErr> {
    refs.get(&id)
        .cloned()
        .ok_or_else(|| DbErr::RecordNotFound(format!("{} {} referenced but missing", field, id)))
}

/// `pick` for nullable foreign keys.
pub fn pick_optional<R: Clone>(
    refs: &HashMap<i32, R>,
    id: Option<i32>,
    field: &str,
) -> Result<Option<R>, DbErr> {
    id.map(|id| pick(refs, id, field)).transpose()
}

/// Takes the references for every id linked to one owner, in link order.
pub fn pick_all<R: Clone>(
    refs: &HashMap<i32, R>,
    linked: Option<&Vec<i32>>,
    field: &str,
) -> Result<Vec<R>, DbErr> {
    linked
        .map(|ids| ids.iter().map(|id| pick(refs, *id, field)).collect())
        .unwrap_or_else(|| Ok(Vec::new()))
}

/// Every target id across a set of loaded links.
pub fn linked_ids(links: &HashMap<i32, Vec<i32>>) -> Vec<i32> {
    unique(links.values().flatten().copied().collect())
}

/// Collects the non-null ids of one foreign key across a page of rows.
pub fn ids<T>(rows: &[T], key: impl Fn(&T) -> Option<i32>) -> Vec<i32> {
    rows.iter().filter_map(key).collect()
}

/// Drops repeated ids, keeping first occurrences in order.
pub fn unique(ids: Vec<i32>) -> Vec<i32> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

/// Checks that the row a payload field points at exists.
///
/// # Arguments
/// - `db` - Connection or open transaction
/// - `field` - Payload field name, used in the error message
/// - `id` - Referenced id
///
/// # Returns
/// - `Ok(())` - Row exists
/// - `Err(AppError::BadRequest)` - No row with that id
/// - `Err(AppError::DbErr)` - Database error during lookup
pub async fn require<E, C>(db: &C, field: &str, id: i32) -> Result<(), AppError>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    C: ConnectionTrait,
{
    match E::find_by_id(id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(AppError::BadRequest(format!(
            "Invalid {}: no record with id {}",
            field, id
        ))),
    }
}

/// `require` for nullable foreign keys; `None` always resolves.
pub async fn require_optional<E, C>(db: &C, field: &str, id: Option<i32>) -> Result<(), AppError>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    C: ConnectionTrait,
{
    match id {
        Some(id) => require::<E, C>(db, field, id).await,
        None => Ok(()),
    }
}

/// Resolves every id of a many-to-many field and returns them without repeats.
pub async fn require_all<E, C>(db: &C, field: &str, ids: Vec<i32>) -> Result<Vec<i32>, AppError>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    C: ConnectionTrait,
{
    let ids = unique(ids);
    for id in &ids {
        require::<E, C>(db, field, *id).await?;
    }

    Ok(ids)
}
