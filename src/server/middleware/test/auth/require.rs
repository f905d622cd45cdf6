use super::*;

/// Tests a valid token resolves to its account and player.
///
/// Expected: Ok(Caller) carrying the token owner's account and player
#[tokio::test]
async fn resolves_caller_from_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, player) = factory::player::PlayerFactory::new(db)
        .username("lantern")
        .build()
        .await?;
    issue_token(db, account.id, "tok-resolves").await?;

    let headers = headers_with("Token tok-resolves");
    let caller = AuthGuard::new(db, &headers).require().await?;

    assert_eq!(caller.account.username, "lantern");
    assert_eq!(caller.player_id(), Some(player.id));

    Ok(())
}

/// Tests a request without an Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests an unknown token is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = headers_with("Bearer nobody-has-this");
    let result = AuthGuard::new(db, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests a token owned by a deactivated account is rejected.
///
/// Expected: Err(AuthError::InactiveAccount) with the account id
#[tokio::test]
async fn rejects_inactive_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, _) = factory::player::PlayerFactory::new(db)
        .active(false)
        .build()
        .await?;
    issue_token(db, account.id, "tok-inactive").await?;

    let headers = headers_with("Token tok-inactive");
    let result = AuthGuard::new(db, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InactiveAccount(id))) if id == account.id
    ));

    Ok(())
}
