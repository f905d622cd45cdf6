use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "survivor_disorder")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub survivor_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub disorder_id: i32,
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
        belongs_to = "super::disorder::Entity",
        from = "Column::DisorderId",
        to = "super::disorder::Column::Id",
        on_delete = "Cascade"
    )]
    Disorder,
}

impl ActiveModelBehavior for ActiveModel {}
