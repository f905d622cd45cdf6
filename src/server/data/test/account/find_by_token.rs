use super::*;

/// Tests a token key resolves to the account it was issued to.
///
/// Expected: Ok(Some) with the issuing account
#[tokio::test]
async fn finds_account_for_issued_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, _) = factory::player::PlayerFactory::new(db)
        .username("tokened")
        .build()
        .await?;
    let repo = AccountRepository::new(db);
    let key = repo.token_for(account.id).await?;

    let found = repo.find_by_token(&key).await?;

    assert_eq!(found.map(|a| a.username), Some("tokened".to_string()));

    Ok(())
}

/// Tests an unknown key resolves to nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_token_finds_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);

    assert!(repo.find_by_token("missing").await?.is_none());

    Ok(())
}
