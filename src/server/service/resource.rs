use std::{collections::HashMap, marker::PhantomData};

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::filter,
    error::AppError,
    kind::{EntityKind, ModelOf},
    model::auth::Caller,
};

/// CRUD over one resource kind.
pub struct ResourceService<'a, K: EntityKind> {
    db: &'a DatabaseConnection,
    kind: PhantomData<K>,
}

impl<'a, K: EntityKind> ResourceService<'a, K> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            kind: PhantomData,
        }
    }

    /// Lists rows matching the query-string filters, ordered by id.
    ///
    /// # Arguments
    /// - `params` - Decoded query string; parameters the kind does not know are ignored
    /// - `caller` - Authenticated caller, used by `current`-style filters
    ///
    /// # Returns
    /// - `Ok(Vec<Dto>)` - Rendered rows, possibly empty
    /// - `Err(AppError::DbErr)` - Database error during query or rendering
    pub async fn list(
        &self,
        params: &HashMap<String, String>,
        caller: Option<&Caller>,
    ) -> Result<Vec<K::Dto>, AppError> {
        let select = filter::apply(K::Entity::find(), &K::filters(), params, caller)
            .order_by_asc(K::ID);

        let models = select.all(self.db).await?;

        Ok(K::render(self.db, models).await?)
    }

    /// Gets one rendered row by id.
    pub async fn get(&self, id: i32) -> Result<Option<K::Dto>, AppError> {
        let Some(model) = K::Entity::find()
            .filter(K::ID.eq(id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(self.render_one(model).await?))
    }

    /// Creates a row from a payload.
    ///
    /// References are resolved and the row and its links are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(Dto)` - The created row, rendered
    /// - `Err(AppError::BadRequest)` - A referenced id does not exist
    /// - `Err(AppError::MethodNotAllowed)` - The kind cannot be created directly
    /// - `Err(AppError::DbErr)` - Database error during write
    pub async fn create(&self, payload: K::Payload) -> Result<K::Dto, AppError> {
        let txn = self.db.begin().await?;

        let model = K::store(&txn, None, payload).await?;

        txn.commit().await?;

        tracing::info!(kind = K::LABEL, id = K::id(&model), "created");

        self.render_one(model).await
    }

    /// Overwrites every field of an existing row.
    ///
    /// # Returns
    /// - `Ok(true)` - Row updated
    /// - `Ok(false)` - No row with that id
    /// - `Err(AppError::BadRequest)` - A referenced id does not exist
    /// - `Err(AppError::DbErr)` - Database error during write
    pub async fn update(&self, id: i32, payload: K::Payload) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let Some(existing) = K::Entity::find().filter(K::ID.eq(id)).one(&txn).await? else {
            return Ok(false);
        };

        K::store(&txn, Some(existing), payload).await?;

        txn.commit().await?;

        tracing::info!(kind = K::LABEL, id, "updated");

        Ok(true)
    }

    /// Deletes a row and everything cascading from it.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No row with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let Some(existing) = K::Entity::find().filter(K::ID.eq(id)).one(&txn).await? else {
            return Ok(false);
        };

        K::remove(&txn, existing).await?;

        txn.commit().await?;

        tracing::info!(kind = K::LABEL, id, "deleted");

        Ok(true)
    }

    async fn render_one(&self, model: ModelOf<K>) -> Result<K::Dto, AppError> {
        let id = K::id(&model);

        K::render(self.db, vec![model])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError(format!("{} {} did not render", K::LABEL, id)))
    }
}
