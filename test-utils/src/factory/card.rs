//! Factories for the card catalogs: abilities, disorders, fighting arts and weapon
//! proficiencies.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for abilities, the catalog most filter tests run against.
pub struct AbilityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    effect: String,
    expansion_id: Option<i32>,
}

impl<'a> AbilityFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Ability {}", id),
            effect: format!("Effect {}", id),
            expansion_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = effect.into();
        self
    }

    pub fn expansion(mut self, expansion_id: i32) -> Self {
        self.expansion_id = Some(expansion_id);
        self
    }

    pub async fn build(self) -> Result<entity::ability::Model, DbErr> {
        entity::ability::ActiveModel {
            name: ActiveValue::Set(self.name),
            effect: ActiveValue::Set(self.effect),
            expansion_id: ActiveValue::Set(self.expansion_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_ability(db: &DatabaseConnection) -> Result<entity::ability::Model, DbErr> {
    AbilityFactory::new(db).build().await
}

pub async fn create_disorder(db: &DatabaseConnection) -> Result<entity::disorder::Model, DbErr> {
    let id = next_id();
    entity::disorder::ActiveModel {
        name: ActiveValue::Set(format!("Disorder {}", id)),
        flavor_text: ActiveValue::Set(format!("Flavor {}", id)),
        effect: ActiveValue::Set(format!("Effect {}", id)),
        expansion_id: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_fighting_art(
    db: &DatabaseConnection,
) -> Result<entity::fighting_art::Model, DbErr> {
    let id = next_id();
    entity::fighting_art::ActiveModel {
        name: ActiveValue::Set(format!("Fighting Art {}", id)),
        effect: ActiveValue::Set(format!("Effect {}", id)),
        expansion_id: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_weapon_proficiency(
    db: &DatabaseConnection,
) -> Result<entity::weapon_proficiency::Model, DbErr> {
    let id = next_id();
    entity::weapon_proficiency::ActiveModel {
        name: ActiveValue::Set(format!("Weapon {}", id)),
        specialist_effect: ActiveValue::Set(format!("Specialist {}", id)),
        master_effect: ActiveValue::Set(format!("Master {}", id)),
        expansion_id: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
