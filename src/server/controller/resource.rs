//! Generic CRUD handlers, instantiated once per resource kind.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, MethodRouter},
    Json, Router,
};

use crate::server::{
    controller::Payload,
    error::AppError,
    kind::EntityKind,
    middleware::auth::AuthGuard,
    service::resource::ResourceService,
    state::AppState,
};

/// List rows of a kind.
///
/// # Access Control
/// - Token required unless anonymous reads are enabled
///
/// # Returns
/// - `200 OK` - Filtered rows ordered by id, possibly empty
/// - `401 Unauthorized` - Missing or invalid token
pub async fn list<K: EntityKind>(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers)
        .read(state.allow_anonymous_reads)
        .await?;

    let service = ResourceService::<K>::new(&state.db);

    let rows = service.list(&params, caller.as_ref()).await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// Retrieve one row of a kind.
///
/// # Returns
/// - `200 OK` - The rendered row
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No row with that id, empty body
pub async fn retrieve<K: EntityKind>(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .read(state.allow_anonymous_reads)
        .await?;

    let service = ResourceService::<K>::new(&state.db);

    match service.get(id).await? {
        Some(row) => Ok((StatusCode::OK, Json(row))),
        None => Err(AppError::NotFound(format!("{} {}", K::LABEL, id))),
    }
}

/// Create a row of a kind.
///
/// The token is checked before the body is decoded.
///
/// # Returns
/// - `201 Created` - The created row, rendered
/// - `400 Bad Request` - Malformed body, missing field or unknown reference
/// - `401 Unauthorized` - Missing or invalid token
pub async fn create<K: EntityKind>(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Payload<K::Payload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;
    let Payload(payload) = body?;

    let service = ResourceService::<K>::new(&state.db);

    let row = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// Replace every field of a row.
///
/// # Returns
/// - `204 No Content` - Row updated
/// - `400 Bad Request` - Malformed body, missing field or unknown reference
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No row with that id
pub async fn update<K: EntityKind>(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    body: Result<Payload<K::Payload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;
    let Payload(payload) = body?;

    let service = ResourceService::<K>::new(&state.db);

    if !service.update(id, payload).await? {
        return Err(AppError::NotFound(format!("{} {}", K::LABEL, id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a row of a kind.
///
/// # Returns
/// - `204 No Content` - Row deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No row with that id
pub async fn destroy<K: EntityKind>(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;

    let service = ResourceService::<K>::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(format!("{} {}", K::LABEL, id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Answers `POST` on kinds that cannot be created directly.
async fn create_not_allowed() -> AppError {
    AppError::MethodNotAllowed("Method \"POST\" not allowed.".to_string())
}

/// Routes for one kind: `/<path>` and `/<path>/{id}`.
pub fn routes<K: EntityKind>() -> Router<AppState> {
    let collection: MethodRouter<AppState> = if K::CREATABLE {
        get(list::<K>).post(create::<K>)
    } else {
        get(list::<K>).post(create_not_allowed)
    };

    Router::new()
        .route(&format!("/{}", K::PATH), collection)
        .route(
            &format!("/{}/{{id}}", K::PATH),
            get(retrieve::<K>).put(update::<K>).delete(destroy::<K>),
        )
}
