//! Expansion lookup factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for expansion rows. Set `id` to line up with the `*_exp` query flags.
pub struct ExpansionTypeFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    name: String,
}

impl<'a> ExpansionTypeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: None,
            name: format!("Expansion {}", next_id()),
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

    pub async fn build(self) -> Result<entity::expansion_type::Model, DbErr> {
        entity::expansion_type::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_expansion_type(
    db: &DatabaseConnection,
) -> Result<entity::expansion_type::Model, DbErr> {
    ExpansionTypeFactory::new(db).build().await
}
