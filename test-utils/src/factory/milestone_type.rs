use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a milestone type with a unique label.
pub async fn create_milestone_type(
    db: &DatabaseConnection,
) -> Result<entity::milestone_type::Model, DbErr> {
    entity::milestone_type::ActiveModel {
        label: ActiveValue::Set(format!("Milestone {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}
