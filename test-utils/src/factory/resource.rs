//! Resource factory. Requires an existing resource type.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ResourceFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    type_id: i32,
    monster_id: Option<i32>,
    expansion_id: Option<i32>,
    strange: bool,
    consumable: bool,
}

impl<'a> ResourceFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, type_id: i32) -> Self {
        Self {
            db,
            name: format!("Resource {}", next_id()),
            type_id,
            monster_id: None,
            expansion_id: None,
            strange: false,
            consumable: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn monster(mut self, monster_id: i32) -> Self {
        self.monster_id = Some(monster_id);
        self
    }

    pub fn expansion(mut self, expansion_id: i32) -> Self {
        self.expansion_id = Some(expansion_id);
        self
    }

    pub fn strange(mut self, strange: bool) -> Self {
        self.strange = strange;
        self
    }

    pub fn consumable(mut self, consumable: bool) -> Self {
        self.consumable = consumable;
        self
    }

    pub async fn build(self) -> Result<entity::resource::Model, DbErr> {
        entity::resource::ActiveModel {
            name: ActiveValue::Set(self.name),
            type_id: ActiveValue::Set(self.type_id),
            monster_id: ActiveValue::Set(self.monster_id),
            expansion_id: ActiveValue::Set(self.expansion_id),
            strange: ActiveValue::Set(self.strange),
            indomitable: ActiveValue::Set(false),
            consumable: ActiveValue::Set(self.consumable),
            vermin: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_resource(
    db: &DatabaseConnection,
    type_id: i32,
) -> Result<entity::resource::Model, DbErr> {
    ResourceFactory::new(db, type_id).build().await
}
