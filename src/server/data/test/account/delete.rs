use super::*;

/// Tests deleting an account removes its token.
///
/// Expected: Ok with neither the account nor the token left
#[tokio::test]
async fn deletes_account_and_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, player) = factory::player::create_player(db).await?;
    let repo = AccountRepository::new(db);
    let key = repo.token_for(account.id).await?;

    entity::prelude::Player::delete_by_id(player.id).exec(db).await?;
    repo.delete(account.id).await?;

    assert!(repo.find_by_id(account.id).await?.is_none());
    assert!(entity::prelude::AuthToken::find_by_id(key)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
