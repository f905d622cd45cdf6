use super::*;

/// Tests registration rows are created with the form's values.
///
/// Expected: Ok with an active, non-staff account and a player carrying the contact details
#[tokio::test]
async fn creates_account_and_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let (account, player) = repo
        .create(&register_params("allister", "allister@example.com"), "hash".to_string())
        .await?;

    assert_eq!(account.username, "allister");
    assert_eq!(account.password, "hash");
    assert!(account.is_active);
    assert!(!account.is_staff);
    assert_eq!(player.account_id, account.id);
    assert!(player.game_master);
    assert_eq!(player.company_name.as_deref(), Some("White Lion Co"));
    assert_eq!(player.phone_number.as_deref(), Some("555-0100"));

    Ok(())
}
