use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "milestone")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub settlement_id: i32,
    pub milestone_type_id: i32,
    pub achieved: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::settlement::Entity",
        from = "Column::SettlementId",
        to = "super::settlement::Column::Id",
        on_delete = "Cascade"
    )]
    Settlement,
    #[sea_orm(
        belongs_to = "super::milestone_type::Entity",
        from = "Column::MilestoneTypeId",
        to = "super::milestone_type::Column::Id",
        on_delete = "Cascade"
    )]
    MilestoneType,
}

impl Related<super::settlement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Settlement.def()
    }
}

impl Related<super::milestone_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MilestoneType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
