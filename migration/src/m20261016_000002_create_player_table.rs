use sea_orm_migration::{prelude::*, schema::*};

use super::m20261016_000001_create_account_tables::Account;
use crate::cascade;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(integer_uniq(Player::AccountId))
                    .col(boolean(Player::GameMaster).default(false))
                    .col(string_null(Player::CompanyName))
                    .col(string_null(Player::PhoneNumber))
                    .foreign_key(&mut cascade(
                        "fk_player_account_id",
                        Player::Table,
                        Player::AccountId,
                        Account::Table,
                        Account::Id,
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    AccountId,
    GameMaster,
    CompanyName,
    PhoneNumber,
}
