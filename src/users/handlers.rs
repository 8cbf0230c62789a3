use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::jwt::{AuthUser, JwtKeys},
    error::AppError,
    state::AppState,
    users::{
        dto::{DeletedEnvelope, RegisteredEnvelope, UserEnvelope},
        repo::{self, NewUser, UserLookup, UserUpdate},
        validate::{is_valid_email, is_valid_password},
    },
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register))
        .route(
            "/users/:id",
            get(user_detail).patch(update_user).delete(delete_user),
        )
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> Result<(StatusCode, Json<RegisteredEnvelope>), AppError> {
    if !is_valid_email(&payload.email) || !is_valid_password(&payload.password) {
        warn!(email = %payload.email, "registration payload failed validation");
        return Err(AppError::InvalidInput(
            "User email and/or password not in the correct format".into(),
        ));
    }

    let user = repo::create_user(&state.db, &payload).await?;

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user.email)?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisteredEnvelope {
            success: true,
            token,
            data: user,
        }),
    ))
}

#[instrument(skip(state, _subject))]
pub async fn user_detail(
    State(state): State<AppState>,
    AuthUser(_subject): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<UserEnvelope>, AppError> {
    let user = repo::get_user(&state.db, UserLookup::ById(id)).await?;
    Ok(Json(UserEnvelope {
        success: true,
        data: user,
    }))
}

#[instrument(skip(state, _subject, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(_subject): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UserUpdate>,
) -> Result<(StatusCode, Json<UserEnvelope>), AppError> {
    let user = repo::update_user(&state.db, id, &payload).await?;
    info!(user_id = user.id, "user updated");
    Ok((
        StatusCode::CREATED,
        Json(UserEnvelope {
            success: true,
            data: user,
        }),
    ))
}

#[instrument(skip(state, _subject))]
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(_subject): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<DeletedEnvelope>, AppError> {
    let deleted = repo::delete_user(&state.db, id).await?;
    info!(user_id = id, "user deleted");
    Ok(Json(DeletedEnvelope {
        success: true,
        data: deleted,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn register_rejects_malformed_email() {
        let state = AppState::fake();
        let payload = NewUser {
            first_name: None,
            last_name: None,
            email: "not-an-email".into(),
            password: "Abcdef1!".into(),
        };
        let err = register(State(state), Json(payload)).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn register_rejects_weak_password() {
        let state = AppState::fake();
        let payload = NewUser {
            first_name: None,
            last_name: None,
            email: "a@b.com".into(),
            password: "password".into(),
        };
        let err = register(State(state), Json(payload)).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
