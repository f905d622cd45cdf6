use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "survivor_weapon_proficiency")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub survivor_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub weapon_proficiency_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::survivor::Entity",
        from = "Column::SurvivorId",
        to = "super::survivor::Column::Id",
        on_delete = "Cascade"
    )]
    Survivor,
    #[sea_orm(
        belongs_to = "super::weapon_proficiency::Entity",
        from = "Column::WeaponProficiencyId",
        to = "super::weapon_proficiency::Column::Id",
        on_delete = "Cascade"
    )]
    WeaponProficiency,
}

impl ActiveModelBehavior for ActiveModel {}
