use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct MonsterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    nemesis: bool,
    expansion_id: Option<i32>,
}

impl<'a> MonsterFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Monster {}", next_id()),
            nemesis: false,
            expansion_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn nemesis(mut self, nemesis: bool) -> Self {
        self.nemesis = nemesis;
        self
    }

    pub fn expansion(mut self, expansion_id: i32) -> Self {
        self.expansion_id = Some(expansion_id);
        self
    }

    pub async fn build(self) -> Result<entity::monster::Model, DbErr> {
        entity::monster::ActiveModel {
            name: ActiveValue::Set(self.name),
            nemesis: ActiveValue::Set(self.nemesis),
            expansion_id: ActiveValue::Set(self.expansion_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_monster(db: &DatabaseConnection) -> Result<entity::monster::Model, DbErr> {
    MonsterFactory::new(db).build().await
}
