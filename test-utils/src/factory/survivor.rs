use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a fresh survivor owned by the given player, with starting stats and no
/// proficiencies, arts, disorders or abilities.
pub async fn create_survivor(
    db: &DatabaseConnection,
    player_id: i32,
) -> Result<entity::survivor::Model, DbErr> {
    entity::survivor::ActiveModel {
        player_id: ActiveValue::Set(player_id),
        name: ActiveValue::Set(format!("Survivor {}", next_id())),
        survival: ActiveValue::Set(1),
        insanity: ActiveValue::Set(0),
        hunt_experience: ActiveValue::Set(0),
        gender: ActiveValue::Set("Female".to_string()),
        movement: ActiveValue::Set(5),
        accuracy: ActiveValue::Set(0),
        strength: ActiveValue::Set(0),
        evasion: ActiveValue::Set(0),
        speed: ActiveValue::Set(0),
        luck: ActiveValue::Set(0),
        understanding: ActiveValue::Set(0),
        courage: ActiveValue::Set(0),
        head_armor: ActiveValue::Set(0),
        head_wound: ActiveValue::Set(false),
        arm_armor: ActiveValue::Set(0),
        arm_light_wound: ActiveValue::Set(false),
        arm_heavy_wound: ActiveValue::Set(false),
        body_armor: ActiveValue::Set(0),
        body_light_wound: ActiveValue::Set(false),
        body_heavy_wound: ActiveValue::Set(false),
        waist_armor: ActiveValue::Set(0),
        waist_light_wound: ActiveValue::Set(false),
        waist_heavy_wound: ActiveValue::Set(false),
        leg_armor: ActiveValue::Set(0),
        leg_light_wound: ActiveValue::Set(false),
        leg_heavy_wound: ActiveValue::Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
}
