use super::*;

/// Tests deleting a player removes the account behind it.
///
/// Expected: Ok(true), then neither the player nor the account exists
#[tokio::test]
async fn deleting_player_removes_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, player) = factory::create_player(db).await?;

    let service = ResourceService::<Players>::new(db);
    assert!(service.delete(player.id).await?);

    assert!(service.get(player.id).await?.is_none());
    assert!(entity::prelude::Account::find_by_id(account.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a missing row reports it.
///
/// Expected: Ok(false)
#[tokio::test]
async fn missing_row_is_reported() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ResourceService::<Events>::new(db);

    assert!(!service.delete(777).await?);

    Ok(())
}

/// Tests deleting a settlement takes its recorded events with it.
///
/// Expected: Ok(true) and no settlement events left
#[tokio::test]
async fn deleting_settlement_cascades() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, settlement) = factory::helpers::create_settlement_with_game_master(db).await?;
    let event = factory::create_event(db).await?;
    ResourceService::<SettlementEvents>::new(db)
        .create(SettlementEventPayload {
            settlement: settlement.id,
            event: event.id,
            year: 1,
        })
        .await?;

    let service = ResourceService::<Settlements>::new(db);
    assert!(service.delete(settlement.id).await?);

    assert!(entity::prelude::SettlementEvent::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}
