use super::*;

/// Tests registration creates an account that can log in.
///
/// Expected: Ok with a non-staff session, then a login returning the same token
#[tokio::test]
async fn registers_and_logs_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let session = service
        .register(register_params("erza", "erza@example.com"))
        .await?;

    assert!(!session.staff);
    assert!(!session.is_game_master);

    let login = service
        .login(LoginParams {
            username: "erza".to_string(),
            password: "lantern-oil".to_string(),
        })
        .await?
        .unwrap();
    assert_eq!(login.token, session.token);

    Ok(())
}

/// Tests a reused email is refused even with a fresh username.
///
/// Expected: Err(AppError::BadRequest) with the duplicate identity message
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .register(register_params("erza", "erza@example.com"))
        .await?;

    let result = service
        .register(register_params("erza2", "erza@example.com"))
        .await;

    match result {
        Err(AppError::BadRequest(message)) => assert_eq!(message, DUPLICATE_IDENTITY),
        other => panic!("expected BadRequest, got {:?}", other.map(|s| s.token)),
    }

    Ok(())
}

/// Tests an account insert that loses a race on the unique username maps to the duplicate message.
///
/// Expected: AppError::BadRequest(DUPLICATE_IDENTITY)
#[tokio::test]
async fn unique_violation_reports_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let params = register_params("racer", "racer@example.com");
    repo.create(&params, "hash".to_string()).await?;

    let err = repo
        .create(&params, "hash".to_string())
        .await
        .expect_err("second insert must violate the unique username");

    match duplicate_identity(err) {
        AppError::BadRequest(message) => assert_eq!(message, DUPLICATE_IDENTITY),
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}
