use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` or one of the grouped helpers, then call
/// `build()` to get a context backed by an in-memory SQLite database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{ExpansionType, Ability};
///
/// let test = TestBuilder::new()
///     .with_table(ExpansionType)
///     .with_table(Ability)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement, foreign keys included, from the SeaORM entity
    /// using SQLite syntax. Add referenced tables before the tables pointing at them.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables backing login and registration: Account, AuthToken and Player.
    pub fn with_account_tables(self) -> Self {
        self.with_table(Account)
            .with_table(AuthToken)
            .with_table(Player)
    }

    /// Adds the lookup and card tables.
    ///
    /// Covers ExpansionType, ResourceType, MilestoneType, Campaign, Monster, Ability,
    /// Disorder, FightingArt, WeaponProficiency, Resource and Event.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(ExpansionType)
            .with_table(ResourceType)
            .with_table(MilestoneType)
            .with_table(Campaign)
            .with_table(Monster)
            .with_table(Ability)
            .with_table(Disorder)
            .with_table(FightingArt)
            .with_table(WeaponProficiency)
            .with_table(Resource)
            .with_table(Event)
    }

    /// Adds every table of the schema in dependency order.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_campaign_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_campaign_tables(self) -> Self {
        self.with_account_tables()
            .with_catalog_tables()
            .with_table(Settlement)
            .with_table(SettlementEvent)
            .with_table(SettlementInventory)
            .with_table(Milestone)
            .with_table(Survivor)
            .with_table(SurvivorWeaponProficiency)
            .with_table(SurvivorFightingArt)
            .with_table(SurvivorDisorder)
            .with_table(SurvivorAbility)
            .with_table(ProficiencyLevel)
            .with_table(Session)
            .with_table(SessionPlayer)
    }

    /// Builds the test context and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
