//! Play sessions and the players attending them.

use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DatabaseTransaction, DbErr};

use crate::{
    model::campaign::{SessionDto, SessionPayload},
    server::{
        data::{
            filter::{FilterRule, MatchKind},
            link::{load_links, replace_links},
            reference::{ids, linked_ids, pick, pick_all, require, require_all, Reference},
        },
        error::AppError,
        kind::{key, persist, ColumnOf, EntityKind, ModelOf},
    },
};

pub struct Sessions;

#[async_trait]
impl EntityKind for Sessions {
    type Entity = entity::session::Entity;
    type Payload = SessionPayload;
    type Dto = SessionDto;

    const PATH: &'static str = "sessions";
    const LABEL: &'static str = "session";
    const ID: ColumnOf<Self> = entity::session::Column::Id;

    fn id(model: &ModelOf<Self>) -> i32 {
        model.id
    }

    fn filters() -> Vec<FilterRule<ColumnOf<Self>>> {
        vec![FilterRule::matching(
            "settlement",
            entity::session::Column::SettlementId,
            MatchKind::Int,
        )]
    }

    async fn render(
        db: &DatabaseConnection,
        models: Vec<ModelOf<Self>>,
    ) -> Result<Vec<SessionDto>, DbErr> {
        let attendance = load_links::<entity::session_player::Entity, _>(
            db,
            entity::session_player::Column::SessionId,
            entity::session_player::Column::PlayerId,
            models.iter().map(|m| m.id).collect(),
        )
        .await?;

        let mut player_ids = ids(&models, |m| Some(m.host_id));
        player_ids.extend(linked_ids(&attendance));
        let players = entity::player::Entity::load(db, player_ids).await?;

        models
            .into_iter()
            .map(|model| {
                Ok(SessionDto {
                    id: model.id,
                    host: pick(&players, model.host_id, "host")?,
                    settlement: model.settlement_id,
                    players: pick_all(&players, attendance.get(&model.id), "players")?,
                })
            })
            .collect()
    }

    async fn store(
        txn: &DatabaseTransaction,
        existing: Option<ModelOf<Self>>,
        payload: SessionPayload,
    ) -> Result<ModelOf<Self>, AppError> {
        require::<entity::player::Entity, _>(txn, "host", payload.host).await?;
        require::<entity::settlement::Entity, _>(txn, "settlement", payload.settlement).await?;
        let attendees =
            require_all::<entity::player::Entity, _>(txn, "players", payload.players).await?;

        let row = entity::session::ActiveModel {
            id: key(existing.as_ref().map(|model| model.id)),
            host_id: ActiveValue::Set(payload.host),
            settlement_id: ActiveValue::Set(payload.settlement),
        };
        let session = persist(txn, row, existing.is_some()).await?;

        replace_links::<entity::session_player::Entity, _, _>(
            txn,
            entity::session_player::Column::SessionId,
            session.id,
            attendees
                .into_iter()
                .map(|player_id| entity::session_player::ActiveModel {
                    session_id: ActiveValue::Set(session.id),
                    player_id: ActiveValue::Set(player_id),
                })
                .collect(),
        )
        .await?;

        Ok(session)
    }
}
