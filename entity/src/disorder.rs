use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "disorder")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub flavor_text: String,
    pub effect: String,
    pub expansion_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::expansion_type::Entity",
        from = "Column::ExpansionId",
        to = "super::expansion_type::Column::Id",
        on_delete = "Cascade"
    )]
    ExpansionType,
}

impl Related<super::expansion_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpansionType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
