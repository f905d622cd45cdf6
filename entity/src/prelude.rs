pub use super::ability::Entity as Ability;
pub use super::account::Entity as Account;
pub use super::auth_token::Entity as AuthToken;
pub use super::campaign::Entity as Campaign;
pub use super::disorder::Entity as Disorder;
pub use super::event::Entity as Event;
pub use super::expansion_type::Entity as ExpansionType;
pub use super::fighting_art::Entity as FightingArt;
pub use super::milestone::Entity as Milestone;
pub use super::milestone_type::Entity as MilestoneType;
pub use super::monster::Entity as Monster;
pub use super::player::Entity as Player;
pub use super::proficiency_level::Entity as ProficiencyLevel;
pub use super::resource::Entity as Resource;
pub use super::resource_type::Entity as ResourceType;
pub use super::session::Entity as Session;
pub use super::session_player::Entity as SessionPlayer;
pub use super::settlement::Entity as Settlement;
pub use super::settlement_event::Entity as SettlementEvent;
pub use super::settlement_inventory::Entity as SettlementInventory;
pub use super::survivor::Entity as Survivor;
pub use super::survivor_ability::Entity as SurvivorAbility;
pub use super::survivor_disorder::Entity as SurvivorDisorder;
pub use super::survivor_fighting_art::Entity as SurvivorFightingArt;
pub use super::survivor_weapon_proficiency::Entity as SurvivorWeaponProficiency;
pub use super::weapon_proficiency::Entity as WeaponProficiency;
