//! Kingdom Death Test Utils
//!
//! Shared helpers for integration and unit tests of the campaign tracker. The crate builds
//! in-memory SQLite databases straight from the SeaORM entity definitions and provides
//! factories that insert rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring which tables exist
//! - **TestContext**: Holds the lazily created database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Row builders for every entity kind used by the API
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_settlement() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (_account, player) = factory::player::create_player(db).await?;
//!     let settlement = factory::settlement::create_settlement(db, player.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
