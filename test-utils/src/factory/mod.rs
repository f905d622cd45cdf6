//! Factory methods for creating test data.
//!
//! Each entity has a factory module with a `*Factory` builder for customization and a
//! `create_*` shortcut for the common case. Factories fill every required column with a
//! unique default so tests only spell out the values they assert on.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let (account, player) = factory::create_player(db).await?;
//! let settlement = factory::create_settlement(db, player.id).await?;
//! let bone = factory::resource_type::ResourceTypeFactory::new(db)
//!     .id(2)
//!     .name("Bone")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `player` - Account plus linked player row
//! - `expansion_type`, `resource_type`, `milestone_type`, `monster` - Lookup rows
//! - `card` - Abilities, disorders, fighting arts and weapon proficiencies
//! - `event`, `resource` - Catalog rows with optional expansion
//! - `settlement`, `survivor` - Campaign rows owned by a player
//! - `helpers` - Unique id counter and multi-entity shortcuts

pub mod card;
pub mod event;
pub mod expansion_type;
pub mod helpers;
pub mod milestone_type;
pub mod monster;
pub mod player;
pub mod resource;
pub mod resource_type;
pub mod settlement;
pub mod survivor;

pub use card::{create_ability, create_disorder, create_fighting_art, create_weapon_proficiency};
pub use event::create_event;
pub use expansion_type::create_expansion_type;
pub use milestone_type::create_milestone_type;
pub use monster::create_monster;
pub use player::create_player;
pub use resource::create_resource;
pub use resource_type::create_resource_type;
pub use settlement::create_settlement;
pub use survivor::create_survivor;
