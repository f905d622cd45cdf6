use std::collections::HashMap;

use crate::{
    model::{
        campaign::{PlayerPayload, SettlementEventPayload, SurvivorPayload, SurvivorSheet},
        catalog::{EventPayload, ResourcePayload},
        reference::NamedDto,
    },
    server::{
        error::AppError,
        kind::{Events, Players, Resources, SettlementEvents, Settlements, Survivors},
        model::auth::{Caller, DUPLICATE_IDENTITY},
        service::resource::ResourceService,
    },
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod list;
mod round_trip;
mod update;

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn resource_payload(name: &str, resource_type: i32) -> ResourcePayload {
    ResourcePayload {
        name: name.to_string(),
        resource_type,
        monster: None,
        expansion: None,
        strange: false,
        indomitable: false,
        consumable: false,
        vermin: false,
    }
}

fn sheet(name: &str) -> SurvivorSheet {
    SurvivorSheet {
        name: name.to_string(),
        survival: 1,
        insanity: 0,
        hunt_experience: 0,
        gender: "F".to_string(),
        movement: 5,
        accuracy: 0,
        strength: 0,
        evasion: 0,
        speed: 0,
        luck: 0,
        understanding: 0,
        courage: 0,
        head_armor: 0,
        head_wound: false,
        arm_armor: 0,
        arm_light_wound: false,
        arm_heavy_wound: false,
        body_armor: 0,
        body_light_wound: false,
        body_heavy_wound: false,
        waist_armor: 0,
        waist_light_wound: false,
        waist_heavy_wound: false,
        leg_armor: 0,
        leg_light_wound: false,
        leg_heavy_wound: false,
    }
}
