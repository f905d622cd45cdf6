//! Players. Created only through registration; the account row carries the identity.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    model::campaign::{PlayerDto, PlayerPayload},
    server::{
        data::{
            account::{AccountIdentity, AccountRepository},
            filter::{CallerScope, FilterRule, MatchKind},
            reference::unique,
        },
        error::AppError,
        kind::{ColumnOf, EntityKind, ModelOf},
        model::auth::DUPLICATE_IDENTITY,
    },
};

pub struct Players;

#[async_trait]
impl EntityKind for Players {
    type Entity = entity::player::Entity;
    type Payload = PlayerPayload;
    type Dto = PlayerDto;

    const PATH: &'static str = "players";
    const LABEL: &'static str = "player";
    const ID: ColumnOf<Self> = entity::player::Column::Id;
    const CREATABLE: bool = false;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    fn filters() -> Vec<FilterRule<ColumnOf<Self>>> {
        vec![
            FilterRule::matching(
                "game_master",
                entity::player::Column::GameMaster,
                MatchKind::Bool,
            ),
            FilterRule::caller(
                "current",
                entity::player::Column::AccountId,
                CallerScope::Account,
            ),
        ]
    }

    async fn render(
        db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<PlayerDto>, DbErr> {
        let accounts = entity::account::Entity::find()
            .filter(
                entity::account::Column::Id
                    .is_in(unique(models.iter().map(|m| m.account_id).collect())),
            )
            .all(db)
            .await?;

        models
            .into_iter()
            .map(|model| {
                let account = accounts
                    .iter()
                    .find(|account| account.id == model.account_id)
                    .ok_or_else(|| {
                        DbErr::RecordNotFound(format!(
                            "account {} of player {} missing",
                            model.account_id, model.id
                        ))
                    })?;

                Ok(PlayerDto {
                    id: model.id,
                    first_name: account.first_name.clone(),
                    last_name: account.last_name.clone(),
                    username: account.username.clone(),
                    email: account.email.clone(),
                    game_master: model.game_master,
                    full_name: format!("{} {}", account.first_name, account.last_name),
                })
            })
            .collect()
    }

    /// Updates the player and its account; creation goes through `/register`.
    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: PlayerPayload,
    ) -> Result<ModelOf<Self>, AppError> {
        let Some(player) = existing else {
            return Err(AppError::MethodNotAllowed(
                "Players are created by registering an account".to_string(),
            ));
        };

        let accounts = AccountRepository::new(txn);

        if accounts
            .identity_taken_by_other(&payload.username, &payload.email, player.account_id)
            .await?
        {
            return Err(AppError::BadRequest(DUPLICATE_IDENTITY.to_string()));
        }

        accounts
            .update_identity(
                player.account_id,
                AccountIdentity {
                    username: payload.username,
                    email: payload.email,
                    first_name: payload.first_name,
                    last_name: payload.last_name,
                },
            )
            .await?;

        let row = entity::player::ActiveModel {
            id: ActiveValue::Unchanged(player.id),
            game_master: ActiveValue::Set(payload.game_master),
            ..Default::default()
        };

        Ok(row.update(txn).await?)
    }

    /// Deleting a player deletes the account behind it.
    async fn remove(txn: &DatabaseTransaction, model: ModelOf<Self>) -> Result<(), AppError> {
        entity::player::Entity::delete_by_id(model.id).exec(txn).await?;
        AccountRepository::new(txn).delete(model.account_id).await?;

        Ok(())
    }
}
