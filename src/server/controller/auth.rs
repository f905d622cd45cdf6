use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::auth::{LoginDto, RegisterDto},
    server::{
        controller::Payload,
        error::AppError,
        model::auth::{AuthSession, LoginParams, RegisterParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Exchange a username and password for a token.
///
/// Always answers 200; rejected credentials produce `{"valid": false}`.
///
/// # Returns
/// - `200 OK` - `{valid, token, staff, is_game_master}` or `{valid: false}`
/// - `400 Bad Request` - Body is not JSON
pub async fn login(
    State(state): State<AppState>,
    Payload(payload): Payload<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    let body = match service.login(LoginParams::from(payload)).await? {
        Some(session) => session.into_dto(),
        None => AuthSession::invalid_dto(),
    };

    Ok((StatusCode::OK, Json(body)))
}

/// Register an account and its player profile.
///
/// # Returns
/// - `200 OK` - `{valid: true, token, staff: false, is_game_master}`
/// - `400 Bad Request` - Missing field, or username or email already in use
pub async fn register(
    State(state): State<AppState>,
    Payload(payload): Payload<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterParams::from_dto(payload)?;

    let service = AuthService::new(&state.db);

    let session = service.register(params).await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}
