//! Nested forms of a referenced row, shared by every resource that points at it.

use serde::{Deserialize, Serialize};

/// Reference to any row identified by a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedDto {
    pub id: i32,
    pub name: String,
}

/// Reference to a player, labelled by the account username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRefDto {
    pub id: i32,
    pub username: String,
}

/// Reference to a milestone type, and the full rendering of one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneTypeDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub label: String,
}

/// Reference to a resource with its type expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRefDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: NamedDto,
}
