//! SeaORM entity definitions for the campaign tracker schema.
//!
//! One module per table. Join tables for many-to-many relations carry a
//! composite primary key so a set can never hold the same member twice.

pub mod prelude;

pub mod ability;
pub mod account;
pub mod auth_token;
pub mod campaign;
pub mod disorder;
pub mod event;
pub mod expansion_type;
pub mod fighting_art;
pub mod milestone;
pub mod milestone_type;
pub mod monster;
pub mod player;
pub mod proficiency_level;
pub mod resource;
pub mod resource_type;
pub mod session;
pub mod session_player;
pub mod settlement;
pub mod settlement_event;
pub mod settlement_inventory;
pub mod survivor;
pub mod survivor_ability;
pub mod survivor_disorder;
pub mod survivor_fighting_art;
pub mod survivor_weapon_proficiency;
pub mod weapon_proficiency;
