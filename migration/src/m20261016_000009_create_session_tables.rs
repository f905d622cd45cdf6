use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261016_000002_create_player_table::Player,
    m20261016_000007_create_settlement_tables::Settlement,
};
use crate::cascade;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Session::Table)
                    .if_not_exists()
                    .col(pk_auto(Session::Id))
                    .col(integer(Session::HostId))
                    .col(integer(Session::SettlementId))
                    .foreign_key(&mut cascade(
                        "fk_session_host_id",
                        Session::Table,
                        Session::HostId,
                        Player::Table,
                        Player::Id,
                    ))
                    .foreign_key(&mut cascade(
                        "fk_session_settlement_id",
                        Session::Table,
                        Session::SettlementId,
                        Settlement::Table,
                        Settlement::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SessionPlayer::Table)
                    .if_not_exists()
                    .col(integer(SessionPlayer::SessionId))
                    .col(integer(SessionPlayer::PlayerId))
                    .primary_key(
                        Index::create()
                            .col(SessionPlayer::SessionId)
                            .col(SessionPlayer::PlayerId),
                    )
                    .foreign_key(&mut cascade(
                        "fk_session_player_session_id",
                        SessionPlayer::Table,
                        SessionPlayer::SessionId,
                        Session::Table,
                        Session::Id,
                    ))
                    .foreign_key(&mut cascade(
                        "fk_session_player_player_id",
                        SessionPlayer::Table,
                        SessionPlayer::PlayerId,
                        Player::Table,
                        Player::Id,
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SessionPlayer::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Session::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Session {
    Table,
    Id,
    HostId,
    SettlementId,
}

#[derive(DeriveIden)]
pub enum SessionPlayer {
    Table,
    SessionId,
    PlayerId,
}
