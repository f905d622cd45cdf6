//! Many-to-many join rows.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

/// Replaces every join row owned by `owner_id` with `rows`.
///
/// # Arguments
/// - `db` - Open transaction the owner row was written in
/// - `owner` - Join-table column pointing at the owner
/// - `owner_id` - Owner row id
/// - `rows` - New join rows, already de-duplicated
pub async fn replace_links<E, A, C>(
    db: &C,
    owner: E::Column,
    owner_id: i32,
    rows: Vec<A>,
) -> Result<(), DbErr>
where
    E: EntityTrait,
    A: ActiveModelTrait<Entity = E> + Send,
    C: ConnectionTrait,
{
    E::delete_many()
        .filter(owner.eq(owner_id))
        .exec(db)
        .await?;

    if !rows.is_empty() {
        E::insert_many(rows).exec_without_returning(db).await?;
    }

    Ok(())
}

/// Loads the targets linked to each owner, keyed by owner id.
///
/// Owners without links are absent from the map.
pub async fn load_links<E, C>(
    db: &C,
    owner: E::Column,
    target: E::Column,
    owner_ids: Vec<i32>,
) -> Result<HashMap<i32, Vec<i32>>, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    if owner_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let pairs: Vec<(i32, i32)> = E::find()
        .select_only()
        .column(owner)
        .column(target)
        .filter(owner.is_in(owner_ids))
        .into_tuple()
        .all(db)
        .await?;

    let mut links: HashMap<i32, Vec<i32>> = HashMap::new();
    for (owner_id, target_id) in pairs {
        links.entry(owner_id).or_default().push(target_id);
    }

    Ok(links)
}
