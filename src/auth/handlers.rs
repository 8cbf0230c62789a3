use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, TokenResponse},
        jwt::JwtKeys,
    },
    error::AppError,
    state::AppState,
    users::repo::{get_user, UserLookup},
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        warn!("login request missing email or password");
        return Err(AppError::InvalidInput(
            "Email and password are required".into(),
        ));
    }

    // A credential mismatch and an unknown email are indistinguishable here.
    let user = get_user(
        &state.db,
        UserLookup::ByCredentials {
            email: &payload.email,
            password: &payload.password,
        },
    )
    .await
    .map_err(|e| match e {
        AppError::NotFound(_) => {
            AppError::Unauthorized("User not found with provided credentials.".into())
        }
        other => other,
    })?;

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user.email)?;

    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}
