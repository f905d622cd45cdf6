use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{
    data::account::AccountRepository, error::AppError, router::router, state::AppState,
    util::password::hash_password,
};


fn app(db: &DatabaseConnection, allow_anonymous_reads: bool) -> Router {
    router().with_state(AppState::new(db.clone(), allow_anonymous_reads))
}

/// Creates a player and returns an `Authorization` header value for it.
async fn authorization(db: &DatabaseConnection) -> Result<String, DbErr> {
    let (account, _) = factory::create_player(db).await?;
    let key = AccountRepository::new(db).token_for(account.id).await?;

    Ok(format!("Token {}", key))
}

fn request(method: Method, uri: &str, auth: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends a request and returns the status and the raw body.
async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, bytes.to_vec())
}

fn json_of(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}
