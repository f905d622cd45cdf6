use super::*;

/// Tests updating a missing row reports it without writing.
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

    let kind = factory::create_resource_type(db).await?;

    let service = ResourceService::<Resources>::new(db);
    let updated = service
        .update(12345, resource_payload("Nothing", kind.id))
        .await?;

    assert!(!updated);

    Ok(())
}

/// Tests omitted nullable references are cleared rather than kept.
///
/// Expected: Ok with the new name and no expansion after update
#[tokio::test]
async fn full_replace_clears_omitted_references() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let expansion = factory::create_expansion_type(db).await?;
    let event = factory::event::EventFactory::new(db)
        .expansion(expansion.id)
        .story(true)
        .build()
        .await?;

    let service = ResourceService::<Events>::new(db);
    let updated = service
        .update(
            event.id,
            EventPayload {
                name: "Renamed".to_string(),
                effect: "Nothing happens.".to_string(),
                story: false,
                campaign: None,
                expansion: None,
            },
        )
        .await?;
    assert!(updated);

    let fetched = service.get(event.id).await?.unwrap();
    assert_eq!(fetched.name, "Renamed");
    assert!(!fetched.story);
    assert!(fetched.expansion.is_none());

    Ok(())
}

/// Tests a survivor update replaces its card sets.
///
/// Expected: Ok with only the new disorder linked
#[tokio::test]
async fn replaces_survivor_sets() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, player) = factory::create_player(db).await?;
    let old = factory::create_disorder(db).await?;
    let new = factory::create_disorder(db).await?;

    let service = ResourceService::<Survivors>::new(db);
    let survivor = service
        .create(SurvivorPayload {
            user: player.id,
            sheet: sheet("Lucy"),
            weapon_proficiency: Vec::new(),
            fighting_art: Vec::new(),
            disorder: vec![old.id],
            ability: Vec::new(),
        })
        .await?;

    service
        .update(
            survivor.id,
            SurvivorPayload {
                user: player.id,
                sheet: sheet("Lucy"),
                weapon_proficiency: Vec::new(),
                fighting_art: Vec::new(),
                disorder: vec![new.id],
                ability: Vec::new(),
            },
        )
        .await?;

    let fetched = service.get(survivor.id).await?.unwrap();
    assert_eq!(
        fetched.disorder.iter().map(|d| d.id).collect::<Vec<_>>(),
        vec![new.id]
    );

    Ok(())
}

/// Tests a player update rewrites the account identity.
///
/// Expected: Ok with the new username and full name rendered
#[tokio::test]
async fn updates_player_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, player) = factory::create_player(db).await?;

    let service = ResourceService::<Players>::new(db);
    service
        .update(
            player.id,
            PlayerPayload {
                first_name: "Zachary".to_string(),
                last_name: "Lantern".to_string(),
                username: "zach".to_string(),
                email: "zach@example.com".to_string(),
                game_master: true,
            },
        )
        .await?;

    let fetched = service.get(player.id).await?.unwrap();
    assert_eq!(fetched.username, "zach");
    assert_eq!(fetched.full_name, "Zachary Lantern");
    assert!(fetched.game_master);

    Ok(())
}

/// Tests a player cannot take another account's username.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_taken_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .username("taken")
        .build()
        .await?;
    let (_, player) = factory::create_player(db).await?;

    let service = ResourceService::<Players>::new(db);
    let result = service
        .update(
            player.id,
            PlayerPayload {
                first_name: "A".to_string(),
                last_name: "B".to_string(),
                username: "taken".to_string(),
                email: "a@example.com".to_string(),
                game_master: false,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a player cannot take another account's email, and the account is left as it was.
///
/// Expected: Err(AppError::BadRequest) with the duplicate identity message
#[tokio::test]
async fn rejects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;
    let (account, player) = factory::create_player(db).await?;

    let service = ResourceService::<Players>::new(db);
    let result = service
        .update(
            player.id,
            PlayerPayload {
                first_name: "A".to_string(),
                last_name: "B".to_string(),
                username: "untaken".to_string(),
                email: "taken@example.com".to_string(),
                game_master: false,
            },
        )
        .await;

    match result {
        Err(AppError::BadRequest(message)) => assert_eq!(message, DUPLICATE_IDENTITY),
        other => panic!("expected BadRequest, got {:?}", other.map(|_| ())),
    }

    let unchanged = entity::account::Entity::find_by_id(account.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(unchanged.email, account.email);

    Ok(())
}
