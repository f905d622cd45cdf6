use sea_orm_migration::{prelude::*, schema::*};

use crate::cascade;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::Id))
                    .col(string_uniq(Account::Username))
                    .col(string(Account::Email))
                    .col(string(Account::FirstName))
                    .col(string(Account::LastName))
                    .col(string(Account::Password))
                    .col(boolean(Account::IsStaff).default(false))
                    .col(boolean(Account::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Account::DateJoined)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AuthToken::Table)
                    .if_not_exists()
                    .col(string(AuthToken::Key).primary_key())
                    .col(integer_uniq(AuthToken::AccountId))
                    .col(
                        timestamp_with_time_zone(AuthToken::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(&mut cascade(
                        "fk_auth_token_account_id",
                        AuthToken::Table,
                        AuthToken::AccountId,
                        Account::Table,
                        Account::Id,
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthToken::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Account {
    Table,
    Id,
    Username,
    Email,
    FirstName,
    LastName,
    Password,
    IsStaff,
    IsActive,
    DateJoined,
}

#[derive(DeriveIden)]
pub enum AuthToken {
    Table,
    Key,
    AccountId,
    CreatedAt,
}
