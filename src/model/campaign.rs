//! Player-owned campaign resources: players, settlements and everything recorded
//! against them.

use serde::{Deserialize, Serialize};

use crate::model::reference::{MilestoneTypeDto, NamedDto, PlayerRefDto, ResourceRefDto};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub game_master: bool,
    pub full_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerPayload {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub game_master: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementDto {
    pub id: i32,
    pub name: String,
    pub population: i32,
    pub survival_limit: i32,
    pub game_master: PlayerRefDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SettlementPayload {
    pub name: String,
    pub population: i32,
    pub survival_limit: i32,
    pub game_master: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementEventDto {
    pub id: i32,
    pub settlement: i32,
    pub event: NamedDto,
    pub year: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SettlementEventPayload {
    pub settlement: i32,
    pub event: i32,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementInventoryDto {
    pub id: i32,
    pub settlement: i32,
    pub resource: ResourceRefDto,
    pub amount: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SettlementInventoryPayload {
    pub settlement: i32,
    pub resource: i32,
    pub amount: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneDto {
    pub id: i32,
    pub settlement: i32,
    pub milestone_type: MilestoneTypeDto,
    pub achieved: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MilestonePayload {
    pub settlement: i32,
    pub milestone_type: i32,
    #[serde(default)]
    pub achieved: bool,
}

/// Survivor sheet values, shared by the rendered survivor and its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurvivorSheet {
    pub name: String,
    pub survival: i32,
    pub insanity: i32,
    pub hunt_experience: i32,
    pub gender: String,
    pub movement: i32,
    pub accuracy: i32,
    pub strength: i32,
    pub evasion: i32,
    pub speed: i32,
    pub luck: i32,
    pub understanding: i32,
    pub courage: i32,
    pub head_armor: i32,
    pub head_wound: bool,
    pub arm_armor: i32,
    pub arm_light_wound: bool,
    pub arm_heavy_wound: bool,
    pub body_armor: i32,
    pub body_light_wound: bool,
    pub body_heavy_wound: bool,
    pub waist_armor: i32,
    pub waist_light_wound: bool,
    pub waist_heavy_wound: bool,
    pub leg_armor: i32,
    pub leg_light_wound: bool,
    pub leg_heavy_wound: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurvivorDto {
    pub id: i32,
    pub user: PlayerRefDto,
    #[serde(flatten)]
    pub sheet: SurvivorSheet,
    pub weapon_proficiency: Vec<NamedDto>,
    pub fighting_art: Vec<NamedDto>,
    pub disorder: Vec<NamedDto>,
    pub ability: Vec<NamedDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SurvivorPayload {
    pub user: i32,
    #[serde(flatten)]
    pub sheet: SurvivorSheet,
    #[serde(default)]
    pub weapon_proficiency: Vec<i32>,
    #[serde(default)]
    pub fighting_art: Vec<i32>,
    #[serde(default)]
    pub disorder: Vec<i32>,
    #[serde(default)]
    pub ability: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProficiencyLevelDto {
    pub id: i32,
    pub name: String,
    pub level: i32,
    pub weapon_type: Option<NamedDto>,
    pub survivor: Option<NamedDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProficiencyLevelPayload {
    pub name: String,
    pub level: i32,
    #[serde(default)]
    pub weapon_type: Option<i32>,
    #[serde(default)]
    pub survivor: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDto {
    pub id: i32,
    pub host: PlayerRefDto,
    pub settlement: i32,
    pub players: Vec<PlayerRefDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionPayload {
    pub host: i32,
    pub settlement: i32,
    #[serde(default)]
    pub players: Vec<i32>,
}
