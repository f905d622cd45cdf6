pub use sea_orm_migration::prelude::*;

mod m20261016_000001_create_account_tables;
mod m20261016_000002_create_player_table;
mod m20261016_000003_create_catalog_tables;
mod m20261016_000004_create_card_tables;
mod m20261016_000005_create_resource_table;
mod m20261016_000006_create_event_table;
mod m20261016_000007_create_settlement_tables;
mod m20261016_000008_create_survivor_tables;
mod m20261016_000009_create_session_tables;
mod m20261016_000010_seed_catalog;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_account_tables::Migration),
            Box::new(m20261016_000002_create_player_table::Migration),
            Box::new(m20261016_000003_create_catalog_tables::Migration),
            Box::new(m20261016_000004_create_card_tables::Migration),
            Box::new(m20261016_000005_create_resource_table::Migration),
            Box::new(m20261016_000006_create_event_table::Migration),
            Box::new(m20261016_000007_create_settlement_tables::Migration),
            Box::new(m20261016_000008_create_survivor_tables::Migration),
            Box::new(m20261016_000009_create_session_tables::Migration),
            Box::new(m20261016_000010_seed_catalog::Migration),
        ]
    }
}

/// Foreign key that follows its parent on delete and update.
pub(crate) fn cascade<T, C, R, K>(
    name: &str,
    from_table: T,
    from_col: C,
    to_table: R,
    to_col: K,
) -> ForeignKeyCreateStatement
where
    T: IntoTableRef,
    C: IntoIden,
    R: IntoTableRef,
    K: IntoIden,
{
    ForeignKey::create()
        .name(name)
        .from(from_table, from_col)
        .to(to_table, to_col)
        .on_delete(ForeignKeyAction::Cascade)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}
