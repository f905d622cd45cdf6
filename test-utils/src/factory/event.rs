use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    effect: String,
    story: bool,
    expansion_id: Option<i32>,
}

impl<'a> EventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Event {}", id),
            effect: format!("Effect {}", id),
            story: false,
            expansion_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn story(mut self, story: bool) -> Self {
        self.story = story;
        self
    }

    pub fn expansion(mut self, expansion_id: i32) -> Self {
        self.expansion_id = Some(expansion_id);
        self
    }

    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            name: ActiveValue::Set(self.name),
            effect: ActiveValue::Set(self.effect),
            story: ActiveValue::Set(self.story),
            campaign_id: ActiveValue::Set(None),
            expansion_id: ActiveValue::Set(self.expansion_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}
