use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a settlement run by the given player.
///
/// Defaults: name `"Settlement {id}"`, survival limit 1, population 4.
pub async fn create_settlement(
    db: &DatabaseConnection,
    game_master_id: i32,
) -> Result<entity::settlement::Model, DbErr> {
    entity::settlement::ActiveModel {
        name: ActiveValue::Set(format!("Settlement {}", next_id())),
        survival_limit: ActiveValue::Set(1),
        population: ActiveValue::Set(4),
        game_master_id: ActiveValue::Set(game_master_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
