use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261016_000002_create_player_table::Player,
    m20261016_000004_create_card_tables::{Ability, Disorder, FightingArt, WeaponProficiency},
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
                    .table(Survivor::Table)
                    .if_not_exists()
                    .col(pk_auto(Survivor::Id))
                    .col(integer(Survivor::PlayerId))
                    .col(string(Survivor::Name))
                    .col(integer(Survivor::Survival))
                    .col(integer(Survivor::Insanity))
                    .col(integer(Survivor::HuntExperience))
                    .col(string(Survivor::Gender))
                    .col(integer(Survivor::Movement))
                    .col(integer(Survivor::Accuracy))
                    .col(integer(Survivor::Strength))
                    .col(integer(Survivor::Evasion))
                    .col(integer(Survivor::Speed))
                    .col(integer(Survivor::Luck))
                    .col(integer(Survivor::Understanding))
                    .col(integer(Survivor::Courage))
                    .col(integer(Survivor::HeadArmor))
                    .col(boolean(Survivor::HeadWound).default(false))
                    .col(integer(Survivor::ArmArmor))
                    .col(boolean(Survivor::ArmLightWound).default(false))
                    .col(boolean(Survivor::ArmHeavyWound).default(false))
                    .col(integer(Survivor::BodyArmor))
                    .col(boolean(Survivor::BodyLightWound).default(false))
                    .col(boolean(Survivor::BodyHeavyWound).default(false))
                    .col(integer(Survivor::WaistArmor))
                    .col(boolean(Survivor::WaistLightWound).default(false))
                    .col(boolean(Survivor::WaistHeavyWound).default(false))
                    .col(integer(Survivor::LegArmor))
                    .col(boolean(Survivor::LegLightWound).default(false))
                    .col(boolean(Survivor::LegHeavyWound).default(false))
                    .foreign_key(&mut cascade(
                        "fk_survivor_player_id",
                        Survivor::Table,
                        Survivor::PlayerId,
                        Player::Table,
                        Player::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SurvivorWeaponProficiency::Table)
                    .if_not_exists()
                    .col(integer(SurvivorWeaponProficiency::SurvivorId))
                    .col(integer(SurvivorWeaponProficiency::WeaponProficiencyId))
                    .primary_key(
                        Index::create()
                            .col(SurvivorWeaponProficiency::SurvivorId)
                            .col(SurvivorWeaponProficiency::WeaponProficiencyId),
                    )
                    .foreign_key(&mut cascade(
                        "fk_survivor_weapon_proficiency_survivor_id",
                        SurvivorWeaponProficiency::Table,
                        SurvivorWeaponProficiency::SurvivorId,
                        Survivor::Table,
                        Survivor::Id,
                    ))
                    .foreign_key(&mut cascade(
                        "fk_survivor_weapon_proficiency_weapon_proficiency_id",
                        SurvivorWeaponProficiency::Table,
                        SurvivorWeaponProficiency::WeaponProficiencyId,
                        WeaponProficiency::Table,
                        WeaponProficiency::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SurvivorFightingArt::Table)
                    .if_not_exists()
                    .col(integer(SurvivorFightingArt::SurvivorId))
                    .col(integer(SurvivorFightingArt::FightingArtId))
                    .primary_key(
                        Index::create()
                            .col(SurvivorFightingArt::SurvivorId)
                            .col(SurvivorFightingArt::FightingArtId),
                    )
                    .foreign_key(&mut cascade(
                        "fk_survivor_fighting_art_survivor_id",
                        SurvivorFightingArt::Table,
                        SurvivorFightingArt::SurvivorId,
                        Survivor::Table,
                        Survivor::Id,
                    ))
                    .foreign_key(&mut cascade(
                        "fk_survivor_fighting_art_fighting_art_id",
                        SurvivorFightingArt::Table,
                        SurvivorFightingArt::FightingArtId,
                        FightingArt::Table,
                        FightingArt::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SurvivorDisorder::Table)
                    .if_not_exists()
                    .col(integer(SurvivorDisorder::SurvivorId))
                    .col(integer(SurvivorDisorder::DisorderId))
                    .primary_key(
                        Index::create()
                            .col(SurvivorDisorder::SurvivorId)
                            .col(SurvivorDisorder::DisorderId),
                    )
                    .foreign_key(&mut cascade(
                        "fk_survivor_disorder_survivor_id",
                        SurvivorDisorder::Table,
                        SurvivorDisorder::SurvivorId,
                        Survivor::Table,
                        Survivor::Id,
                    ))
                    .foreign_key(&mut cascade(
                        "fk_survivor_disorder_disorder_id",
                        SurvivorDisorder::Table,
                        SurvivorDisorder::DisorderId,
                        Disorder::Table,
                        Disorder::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SurvivorAbility::Table)
                    .if_not_exists()
                    .col(integer(SurvivorAbility::SurvivorId))
                    .col(integer(SurvivorAbility::AbilityId))
                    .primary_key(
                        Index::create()
                            .col(SurvivorAbility::SurvivorId)
                            .col(SurvivorAbility::AbilityId),
                    )
                    .foreign_key(&mut cascade(
                        "fk_survivor_ability_survivor_id",
                        SurvivorAbility::Table,
                        SurvivorAbility::SurvivorId,
                        Survivor::Table,
                        Survivor::Id,
                    ))
                    .foreign_key(&mut cascade(
                        "fk_survivor_ability_ability_id",
                        SurvivorAbility::Table,
                        SurvivorAbility::AbilityId,
                        Ability::Table,
                        Ability::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProficiencyLevel::Table)
                    .if_not_exists()
                    .col(pk_auto(ProficiencyLevel::Id))
                    .col(string(ProficiencyLevel::Name))
                    .col(integer(ProficiencyLevel::Level))
                    .col(integer_null(ProficiencyLevel::WeaponTypeId))
                    .col(integer_null(ProficiencyLevel::SurvivorId))
                    .foreign_key(&mut cascade(
                        "fk_proficiency_level_weapon_type_id",
                        ProficiencyLevel::Table,
                        ProficiencyLevel::WeaponTypeId,
                        WeaponProficiency::Table,
                        WeaponProficiency::Id,
                    ))
                    .foreign_key(&mut cascade(
                        "fk_proficiency_level_survivor_id",
                        ProficiencyLevel::Table,
                        ProficiencyLevel::SurvivorId,
                        Survivor::Table,
                        Survivor::Id,
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProficiencyLevel::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SurvivorWeaponProficiency::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SurvivorFightingArt::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SurvivorDisorder::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SurvivorAbility::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Survivor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Survivor {
    Table,
    Id,
    PlayerId,
    Name,
    Survival,
    Insanity,
    HuntExperience,
    Gender,
    Movement,
    Accuracy,
    Strength,
    Evasion,
    Speed,
    Luck,
    Understanding,
    Courage,
    HeadArmor,
    HeadWound,
    ArmArmor,
    ArmLightWound,
    ArmHeavyWound,
    BodyArmor,
    BodyLightWound,
    BodyHeavyWound,
    WaistArmor,
    WaistLightWound,
    WaistHeavyWound,
    LegArmor,
    LegLightWound,
    LegHeavyWound,
}

#[derive(DeriveIden)]
pub enum SurvivorWeaponProficiency {
    Table,
    SurvivorId,
    WeaponProficiencyId,
}

#[derive(DeriveIden)]
pub enum SurvivorFightingArt {
    Table,
    SurvivorId,
    FightingArtId,
}

#[derive(DeriveIden)]
pub enum SurvivorDisorder {
    Table,
    SurvivorId,
    DisorderId,
}

#[derive(DeriveIden)]
pub enum SurvivorAbility {
    Table,
    SurvivorId,
    AbilityId,
}

#[derive(DeriveIden)]
pub enum ProficiencyLevel {
    Table,
    Id,
    Name,
    Level,
    WeaponTypeId,
    SurvivorId,
}
