use super::*;

/// Tests an existing id resolves.
///
/// Expected: Ok(())
#[tokio::test]
async fn resolves_existing_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;

    require::<entity::event::Entity, _>(db, "event", event.id).await?;

    Ok(())
}

/// Tests a missing id is reported against the payload field.
///
/// Expected: Err(AppError::BadRequest) naming the field and id
#[tokio::test]
async fn reports_missing_row_by_field() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = require::<entity::event::Entity, _>(db, "event", 42).await;

    match result {
        Err(AppError::BadRequest(message)) => {
            assert_eq!(message, "Invalid event: no record with id 42")
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}

/// Tests many-to-many ids are de-duplicated and all checked.
///
/// Expected: Ok with repeats removed, Err when any id is missing
#[tokio::test]
async fn require_all_dedupes_and_checks_each() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_ability(db).await?;
    let second = factory::create_ability(db).await?;

    let ids = require_all::<entity::ability::Entity, _>(
        db,
        "ability",
        vec![first.id, second.id, first.id],
    )
    .await?;
    assert_eq!(ids, vec![first.id, second.id]);

    let result =
        require_all::<entity::ability::Entity, _>(db, "ability", vec![first.id, 404]).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
