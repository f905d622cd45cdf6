use super::*;

/// Tests valid credentials return the account's token and role flags.
///
/// Expected: Ok(Some) with a token, staff flag and game master flag
#[tokio::test]
async fn valid_credentials_issue_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .username("erza")
        .password_hash(hash_password("secret")?)
        .staff(true)
        .game_master(true)
        .build()
        .await?;

    let service = AuthService::new(db);
    let session = service
        .login(LoginParams {
            username: "erza".to_string(),
            password: "secret".to_string(),
        })
        .await?
        .unwrap();

    assert!(!session.token.is_empty());
    assert!(session.staff);
    assert!(session.is_game_master);

    let again = service
        .login(LoginParams {
            username: "erza".to_string(),
            password: "secret".to_string(),
        })
        .await?
        .unwrap();
    assert_eq!(again.token, session.token);

    Ok(())
}

/// Tests a wrong password and an unknown username are both rejected.
///
/// Expected: Ok(None) in both cases
#[tokio::test]
async fn bad_credentials_are_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .username("erza")
        .password_hash(hash_password("secret")?)
        .build()
        .await?;

    let service = AuthService::new(db);

    let wrong_password = service
        .login(LoginParams {
            username: "erza".to_string(),
            password: "guess".to_string(),
        })
        .await?;
    assert!(wrong_password.is_none());

    let unknown = service
        .login(LoginParams {
            username: "nobody".to_string(),
            password: "secret".to_string(),
        })
        .await?;
    assert!(unknown.is_none());

    Ok(())
}

/// Tests inactive accounts cannot log in even with the right password.
///
/// Expected: Ok(None)
#[tokio::test]
async fn inactive_account_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .username("retired")
        .password_hash(hash_password("secret")?)
        .active(false)
        .build()
        .await?;

    let session = AuthService::new(db)
        .login(LoginParams {
            username: "retired".to_string(),
            password: "secret".to_string(),
        })
        .await?;

    assert!(session.is_none());

    Ok(())
}
