//! Resource kinds served by the generic controller.
//!
//! Each kind binds an entity to its payload, its rendered form, its URL segment and its
//! filter table. The controller and `ResourceService` only ever talk to `EntityKind`, so
//! adding a resource means adding one implementation here and one line in the router.

pub mod card;
pub mod catalog;
pub mod event;
pub mod filters;
pub mod player;
pub mod resource;
pub mod session;
pub mod settlement;
pub mod survivor;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::server::{data::filter::FilterRule, error::AppError};

pub use card::{Abilities, Disorders, FightingArts, WeaponProficiencies};
pub use catalog::{Campaigns, ExpansionTypes, MilestoneTypes, Monsters, ResourceTypes};
pub use event::{Events, SettlementEvents};
pub use player::Players;
pub use resource::Resources;
pub use session::Sessions;
pub use settlement::{Milestones, SettlementInventories, Settlements};
pub use survivor::{ProficiencyLevels, Survivors};

pub type ModelOf<K> = <<K as EntityKind>::Entity as EntityTrait>::Model;
pub type ColumnOf<K> = <<K as EntityKind>::Entity as EntityTrait>::Column;

#[async_trait]
pub trait EntityKind: Send + Sync + 'static {
    type Entity: EntityTrait;
    /// Request body for create and update.
    type Payload: DeserializeOwned + Send + 'static;
    /// Rendered form returned by list, retrieve and create.
    type Dto: Serialize + Send + 'static;

    /// URL segment, `/players`.
    const PATH: &'static str;
    /// Human-readable name used in logs and error messages.
    const LABEL: &'static str;
    /// Primary key column.
    const ID: ColumnOf<Self>;
    /// Whether `POST /<path>` is served. Uncreatable kinds answer 405.
    const CREATABLE: bool = true;

    fn id(model: &ModelOf<Self>) -> i32;

    /// Query-string filters accepted by list.
    fn filters() -> Vec<FilterRule<ColumnOf<Self>>> {
        Vec::new()
    }

    /// Renders a page of rows, loading nested references in one batch per field.
    async fn render(
        db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<Self::Dto>, DbErr>;

    /// Validates the payload's references and writes the row.
    ///
    /// `existing` is `None` for create. Every field is overwritten on update.
    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: Self::Payload,
    ) -> Result<ModelOf<Self>, AppError>;

    /// Deletes a row; dependent rows go with it through the cascading foreign keys.
    async fn remove(txn: &DatabaseTransaction, model: ModelOf<Self>) -> Result<(), AppError> {
        Self::Entity::delete_many()
            .filter(Self::ID.eq(Self::id(&model)))
            .exec(txn)
            .await?;

        Ok(())
    }
}

/// Primary key value for an active model: left unset for inserts, pinned for updates.
pub(crate) fn key(id: Option<i32>) -> ActiveValue<i32> {
    match id {
        Some(id) => ActiveValue::Unchanged(id),
        None => ActiveValue::NotSet,
    }
}

/// Inserts or updates `row` depending on whether the record already exists.
pub(crate) async fn persist<A>(
    txn: &DatabaseTransaction,
    row: A,
    exists: bool,
) -> Result<<A::Entity as EntityTrait>::Model, DbErr>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    if exists {
        row.update(txn).await
    } else {
        row.insert(txn).await
    }
}
