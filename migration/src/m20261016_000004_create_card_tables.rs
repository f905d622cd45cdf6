use sea_orm_migration::{prelude::*, schema::*};

use super::m20261016_000003_create_catalog_tables::ExpansionType;
use crate::cascade;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ability::Table)
                    .if_not_exists()
                    .col(pk_auto(Ability::Id))
                    .col(string(Ability::Name))
                    .col(text(Ability::Effect))
                    .col(integer_null(Ability::ExpansionId))
                    .foreign_key(&mut cascade(
                        "fk_ability_expansion_id",
                        Ability::Table,
                        Ability::ExpansionId,
                        ExpansionType::Table,
                        ExpansionType::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Disorder::Table)
                    .if_not_exists()
                    .col(pk_auto(Disorder::Id))
                    .col(string(Disorder::Name))
                    .col(text(Disorder::FlavorText))
                    .col(text(Disorder::Effect))
                    .col(integer_null(Disorder::ExpansionId))
                    .foreign_key(&mut cascade(
                        "fk_disorder_expansion_id",
                        Disorder::Table,
                        Disorder::ExpansionId,
                        ExpansionType::Table,
                        ExpansionType::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FightingArt::Table)
                    .if_not_exists()
                    .col(pk_auto(FightingArt::Id))
                    .col(string(FightingArt::Name))
                    .col(text(FightingArt::Effect))
                    .col(integer_null(FightingArt::ExpansionId))
                    .foreign_key(&mut cascade(
                        "fk_fighting_art_expansion_id",
                        FightingArt::Table,
                        FightingArt::ExpansionId,
                        ExpansionType::Table,
                        ExpansionType::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WeaponProficiency::Table)
                    .if_not_exists()
                    .col(pk_auto(WeaponProficiency::Id))
                    .col(string(WeaponProficiency::Name))
                    .col(text(WeaponProficiency::SpecialistEffect))
                    .col(text(WeaponProficiency::MasterEffect))
                    .col(integer_null(WeaponProficiency::ExpansionId))
                    .foreign_key(&mut cascade(
                        "fk_weapon_proficiency_expansion_id",
                        WeaponProficiency::Table,
                        WeaponProficiency::ExpansionId,
                        ExpansionType::Table,
                        ExpansionType::Id,
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WeaponProficiency::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FightingArt::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Disorder::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Ability::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ability {
    Table,
    Id,
    Name,
    Effect,
    ExpansionId,
}

#[derive(DeriveIden)]
pub enum Disorder {
    Table,
    Id,
    Name,
    FlavorText,
    Effect,
    ExpansionId,
}

#[derive(DeriveIden)]
pub enum FightingArt {
    Table,
    Id,
    Name,
    Effect,
    ExpansionId,
}

#[derive(DeriveIden)]
pub enum WeaponProficiency {
    Table,
    Id,
    Name,
    SpecialistEffect,
    MasterEffect,
    ExpansionId,
}
