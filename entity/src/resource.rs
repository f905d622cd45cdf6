//! Gear and crafting resource. `type_id` is the resource type, `monster_id`
//! the monster it is harvested from, if any.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resource")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub type_id: i32,
    pub monster_id: Option<i32>,
    pub expansion_id: Option<i32>,
    pub strange: bool,
    pub indomitable: bool,
    pub consumable: bool,
    pub vermin: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::resource_type::Entity",
        from = "Column::TypeId",
        to = "super::resource_type::Column::Id",
        on_delete = "Cascade"
    )]
    ResourceType,
    #[sea_orm(
        belongs_to = "super::monster::Entity",
        from = "Column::MonsterId",
        to = "super::monster::Column::Id",
        on_delete = "Cascade"
    )]
    Monster,
    #[sea_orm(
        belongs_to = "super::expansion_type::Entity",
        from = "Column::ExpansionId",
        to = "super::expansion_type::Column::Id",
        on_delete = "Cascade"
    )]
    ExpansionType,
}

impl Related<super::resource_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceType.def()
    }
}

impl Related<super::monster::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Monster.def()
    }
}

impl Related<super::expansion_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpansionType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
