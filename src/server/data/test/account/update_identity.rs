use super::*;

/// Tests identity fields are overwritten while the password is kept.
///
/// Expected: Ok with new names and email, original password hash
#[tokio::test]
async fn overwrites_identity_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, _) = factory::player::PlayerFactory::new(db)
        .password_hash("kept")
        .build()
        .await?;
    let repo = AccountRepository::new(db);

    let updated = repo
        .update_identity(
            account.id,
            AccountIdentity {
                username: "renamed".to_string(),
                email: "renamed@example.com".to_string(),
                first_name: "New".to_string(),
                last_name: "Name".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.username, "renamed");
    assert_eq!(updated.email, "renamed@example.com");
    assert_eq!(updated.first_name, "New");
    assert_eq!(updated.password, "kept");

    Ok(())
}
