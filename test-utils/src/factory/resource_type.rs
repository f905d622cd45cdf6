//! Resource type lookup factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ResourceTypeFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    name: String,
}

impl<'a> ResourceTypeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: None,
            name: format!("Resource Type {}", next_id()),
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::resource_type::Model, DbErr> {
        entity::resource_type::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_resource_type(
    db: &DatabaseConnection,
) -> Result<entity::resource_type::Model, DbErr> {
    ResourceTypeFactory::new(db).build().await
}
