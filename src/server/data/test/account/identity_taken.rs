use super::*;

/// Tests either a matching username or a matching email counts as taken.
///
/// Expected: Ok(true) for a shared username or email, Ok(false) for fresh values
#[tokio::test]
async fn detects_username_or_email_in_use() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .username("zachary")
        .email("zachary@example.com")
        .build()
        .await?;
    let repo = AccountRepository::new(db);

    assert!(repo.identity_taken("zachary", "other@example.com").await?);
    assert!(repo.identity_taken("other", "zachary@example.com").await?);
    assert!(!repo.identity_taken("other", "other@example.com").await?);

    Ok(())
}

/// Tests an account's own identity is not reported as taken by another.
///
/// Expected: Ok(false) for the owner, Ok(true) for anyone else on username or email
#[tokio::test]
async fn own_identity_is_not_taken_by_other() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _) = factory::player::PlayerFactory::new(db)
        .username("lucy")
        .email("lucy@example.com")
        .build()
        .await?;
    let (other, _) = factory::player::create_player(db).await?;
    let repo = AccountRepository::new(db);

    assert!(
        !repo
            .identity_taken_by_other("lucy", "lucy@example.com", owner.id)
            .await?
    );
    assert!(
        repo.identity_taken_by_other("lucy", "fresh@example.com", other.id)
            .await?
    );
    assert!(
        repo.identity_taken_by_other("fresh", "lucy@example.com", other.id)
            .await?
    );
    assert!(
        !repo
            .identity_taken_by_other("fresh", "fresh@example.com", other.id)
            .await?
    );

    Ok(())
}
