//! Survivor sheet owned by a player.
//!
//! Weapon proficiencies, fighting arts, disorders and abilities live in the
//! `survivor_*` join tables.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "survivor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_id: i32,
    pub name: String,
    pub survival: i32,
    pub insanity: i32,
    pub hunt_experience: i32,
    pub gender: String,
    pub movement: i32,
    pub accuracy: i32,
    pub strength: i32,
    pub evasion: i32,
    pub speed: i32,
    pub luck: i32,
    pub understanding: i32,
    pub courage: i32,
    pub head_armor: i32,
    pub head_wound: bool,
    pub arm_armor: i32,
    pub arm_light_wound: bool,
    pub arm_heavy_wound: bool,
    pub body_armor: i32,
    pub body_light_wound: bool,
    pub body_heavy_wound: bool,
    pub waist_armor: i32,
    pub waist_light_wound: bool,
    pub waist_heavy_wound: bool,
    pub leg_armor: i32,
    pub leg_light_wound: bool,
    pub leg_heavy_wound: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_delete = "Cascade"
    )]
    Player,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
