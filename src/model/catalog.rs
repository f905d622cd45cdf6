//! Lookup and card catalog resources.

use serde::{Deserialize, Serialize};

use crate::model::reference::NamedDto;

/// Payload for the lookups rendered as `{id, name}`: expansions and resource types.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedPayload {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MilestoneTypePayload {
    #[serde(rename = "type")]
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignDto {
    pub id: i32,
    pub name: String,
    pub years: i32,
    pub expansion: Option<NamedDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CampaignPayload {
    pub name: String,
    pub years: i32,
    #[serde(default)]
    pub expansion: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterDto {
    pub id: i32,
    pub name: String,
    pub nemesis: bool,
    pub expansion: Option<NamedDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonsterPayload {
    pub name: String,
    #[serde(default)]
    pub nemesis: bool,
    #[serde(default)]
    pub expansion: Option<i32>,
}

/// Abilities and fighting arts share this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDto {
    pub id: i32,
    pub name: String,
    pub effect: String,
    pub expansion: Option<NamedDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardPayload {
    pub name: String,
    pub effect: String,
    #[serde(default)]
    pub expansion: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisorderDto {
    pub id: i32,
    pub name: String,
    pub flavor_text: String,
    pub effect: String,
    pub expansion: Option<NamedDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisorderPayload {
    pub name: String,
    pub flavor_text: String,
    pub effect: String,
    #[serde(default)]
    pub expansion: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponProficiencyDto {
    pub id: i32,
    pub name: String,
    pub specialist_effect: String,
    pub master_effect: String,
    pub expansion: Option<NamedDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeaponProficiencyPayload {
    pub name: String,
    pub specialist_effect: String,
    pub master_effect: String,
    #[serde(default)]
    pub expansion: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: NamedDto,
    pub monster: Option<NamedDto>,
    pub expansion: Option<NamedDto>,
    pub strange: bool,
    pub indomitable: bool,
    pub consumable: bool,
    pub vermin: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourcePayload {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: i32,
    #[serde(default)]
    pub monster: Option<i32>,
    #[serde(default)]
    pub expansion: Option<i32>,
    #[serde(default)]
    pub strange: bool,
    #[serde(default)]
    pub indomitable: bool,
    #[serde(default)]
    pub consumable: bool,
    #[serde(default)]
    pub vermin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDto {
    pub id: i32,
    pub name: String,
    pub effect: String,
    pub story: bool,
    pub campaign: Option<NamedDto>,
    pub expansion: Option<NamedDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventPayload {
    pub name: String,
    pub effect: String,
    #[serde(default)]
    pub story: bool,
    #[serde(default)]
    pub campaign: Option<i32>,
    #[serde(default)]
    pub expansion: Option<i32>,
}
