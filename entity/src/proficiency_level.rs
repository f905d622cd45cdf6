//! Progress of a survivor along one weapon proficiency track.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "proficiency_level")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub level: i32,
    pub weapon_type_id: Option<i32>,
    pub survivor_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::weapon_proficiency::Entity",
        from = "Column::WeaponTypeId",
        to = "super::weapon_proficiency::Column::Id",
        on_delete = "Cascade"
    )]
    WeaponProficiency,
    #[sea_orm(
        belongs_to = "super::survivor::Entity",
        from = "Column::SurvivorId",
        to = "super::survivor::Column::Id",
        on_delete = "Cascade"
    )]
    Survivor,
}

impl Related<super::weapon_proficiency::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeaponProficiency.def()
    }
}

impl Related<super::survivor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Survivor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
