use axum::http::{header, HeaderMap, HeaderValue};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{parse_authorization, AuthGuard},
};

mod require;

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

async fn issue_token(db: &DatabaseConnection, account_id: i32, key: &str) -> Result<(), DbErr> {
    entity::auth_token::ActiveModel {
        key: ActiveValue::Set(key.to_string()),
        account_id: ActiveValue::Set(account_id),
        created_at: ActiveValue::Set(chrono::Utc::now()),
    }
    .insert(db)
    .await?;

    Ok(())
}

#[test]
fn parses_token_and_bearer_schemes() {
    assert_eq!(parse_authorization("Token abc123"), Some("abc123"));
    assert_eq!(parse_authorization("Bearer abc123"), Some("abc123"));
    assert_eq!(parse_authorization("token abc123"), Some("abc123"));
}

#[test]
fn rejects_malformed_headers() {
    assert_eq!(parse_authorization("abc123"), None);
    assert_eq!(parse_authorization("Basic abc123"), None);
    assert_eq!(parse_authorization("Token "), None);
    assert_eq!(parse_authorization("Token a b"), None);
}
