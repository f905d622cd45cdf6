//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a player and a settlement run by that player.
///
/// # Returns
/// - `Ok((account, player, settlement))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_settlement_with_game_master(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::account::Model,
        entity::player::Model,
        entity::settlement::Model,
    ),
    DbErr,
> {
    let (account, player) = crate::factory::player::PlayerFactory::new(db)
        .game_master(true)
        .build()
        .await?;
    let settlement = crate::factory::settlement::create_settlement(db, player.id).await?;

    Ok((account, player, settlement))
}
