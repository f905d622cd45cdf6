use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "milestone_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Stored and rendered as `type`.
    #[sea_orm(column_name = "type")]
    pub label: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
