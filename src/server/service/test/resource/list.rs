use super::*;

/// Tests a `true` flag and a `false` flag compose by intersection.
///
/// Expected: Ok with only the strange, non-consumable resource
#[tokio::test]
async fn composes_toggles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kind = factory::create_resource_type(db).await?;
    factory::resource::ResourceFactory::new(db, kind.id)
        .name("Both")
        .strange(true)
        .consumable(true)
        .build()
        .await?;
    let wanted = factory::resource::ResourceFactory::new(db, kind.id)
        .name("Strange only")
        .strange(true)
        .build()
        .await?;
    factory::resource::ResourceFactory::new(db, kind.id)
        .name("Neither")
        .build()
        .await?;

    let service = ResourceService::<Resources>::new(db);
    let rows = service
        .list(&params(&[("strange", "true"), ("consumable", "false")]), None)
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, wanted.id);

    Ok(())
}

/// Tests expansion toggles select by id and exclusion keeps core cards.
///
/// Expected: Ok with the Dragon King event for `true`, and the other two for `false`
#[tokio::test]
async fn expansion_toggle_includes_and_excludes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dragon_king = factory::expansion_type::ExpansionTypeFactory::new(db)
        .id(1)
        .name("Dragon King")
        .build()
        .await?;
    let gorm = factory::expansion_type::ExpansionTypeFactory::new(db)
        .id(4)
        .name("Gorm")
        .build()
        .await?;
    let dk_event = factory::event::EventFactory::new(db)
        .expansion(dragon_king.id)
        .build()
        .await?;
    let gorm_event = factory::event::EventFactory::new(db)
        .expansion(gorm.id)
        .build()
        .await?;
    let core_event = factory::create_event(db).await?;

    let service = ResourceService::<Events>::new(db);

    let included = service
        .list(&params(&[("dragon_king_exp", "true")]), None)
        .await?;
    assert_eq!(
        included.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![dk_event.id]
    );

    let excluded = service
        .list(&params(&[("dragon_king_exp", "false")]), None)
        .await?;
    assert_eq!(
        excluded.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![gorm_event.id, core_event.id]
    );

    let core_only = service
        .list(&params(&[("expansion", "false")]), None)
        .await?;
    assert_eq!(
        core_only.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![core_event.id]
    );

    Ok(())
}

/// Tests `current` narrows players to the caller and matches nothing anonymously.
///
/// Expected: Ok with the caller's player only, then an empty list without a caller
#[tokio::test]
async fn current_uses_the_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, player) = factory::create_player(db).await?;
    factory::create_player(db).await?;
    let caller = Caller {
        account,
        player: Some(player.clone()),
    };

    let service = ResourceService::<Players>::new(db);

    let mine = service
        .list(&params(&[("current", "")]), Some(&caller))
        .await?;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, player.id);

    let anonymous = service.list(&params(&[("current", "")]), None).await?;
    assert!(anonymous.is_empty());

    Ok(())
}

/// Tests unknown parameters are ignored and rows come back ordered by id.
///
/// Expected: Ok with every settlement in id order
#[tokio::test]
async fn ignores_unknown_params() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, player) = factory::create_player(db).await?;
    let first = factory::create_settlement(db, player.id).await?;
    let second = factory::create_settlement(db, player.id).await?;

    let service = ResourceService::<Settlements>::new(db);
    let rows = service
        .list(&params(&[("colour", "red"), ("game_master", "abc")]), None)
        .await?;

    assert_eq!(
        rows.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}

/// Tests players filter by the game master flag.
///
/// Expected: Ok with only game masters for `true`
#[tokio::test]
async fn filters_players_by_game_master() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, master) = factory::player::PlayerFactory::new(db)
        .game_master(true)
        .build()
        .await?;
    factory::create_player(db).await?;

    let service = ResourceService::<Players>::new(db);
    let rows = service
        .list(&params(&[("game_master", "true")]), None)
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, master.id);
    assert!(rows[0].game_master);

    Ok(())
}
