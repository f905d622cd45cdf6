use super::*;
use crate::server::util::token::TOKEN_LENGTH;

/// Tests the first call issues a token and later calls reuse it.
///
/// Expected: Ok with the same 40-character key both times
#[tokio::test]
async fn issues_once_then_reuses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, _) = factory::player::create_player(db).await?;
    let repo = AccountRepository::new(db);

    let first = repo.token_for(account.id).await?;
    let second = repo.token_for(account.id).await?;

    assert_eq!(first.len(), TOKEN_LENGTH);
    assert_eq!(first, second);

    Ok(())
}

/// Tests issuing a token for an account that already holds one returns the stored token.
///
/// Expected: Ok with the first key and a single token row
#[tokio::test]
async fn issue_after_concurrent_issue_reuses_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, _) = factory::player::create_player(db).await?;
    let repo = AccountRepository::new(db);

    let first = repo.issue_token(account.id).await?;
    let second = repo.issue_token(account.id).await?;

    assert_eq!(first, second);
    assert_eq!(entity::prelude::AuthToken::find().all(db).await?.len(), 1);

    Ok(())
}
