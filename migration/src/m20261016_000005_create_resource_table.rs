use sea_orm_migration::{prelude::*, schema::*};

use super::m20261016_000003_create_catalog_tables::{ExpansionType, Monster, ResourceType};
use crate::cascade;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resource::Table)
                    .if_not_exists()
                    .col(pk_auto(Resource::Id))
                    .col(string(Resource::Name))
                    .col(integer(Resource::TypeId))
                    .col(integer_null(Resource::MonsterId))
                    .col(integer_null(Resource::ExpansionId))
                    .col(boolean(Resource::Strange).default(false))
                    .col(boolean(Resource::Indomitable).default(false))
                    .col(boolean(Resource::Consumable).default(false))
                    .col(boolean(Resource::Vermin).default(false))
                    .foreign_key(&mut cascade(
                        "fk_resource_type_id",
                        Resource::Table,
                        Resource::TypeId,
                        ResourceType::Table,
                        ResourceType::Id,
                    ))
                    .foreign_key(&mut cascade(
                        "fk_resource_monster_id",
                        Resource::Table,
                        Resource::MonsterId,
                        Monster::Table,
                        Monster::Id,
                    ))
                    .foreign_key(&mut cascade(
                        "fk_resource_expansion_id",
                        Resource::Table,
                        Resource::ExpansionId,
                        ExpansionType::Table,
                        ExpansionType::Id,
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Resource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Resource {
    Table,
    Id,
    Name,
    TypeId,
    MonsterId,
    ExpansionId,
    Strange,
    Indomitable,
    Consumable,
    Vermin,
}
