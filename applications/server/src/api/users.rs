/// Account API routes
use crate::{
    error::{Result, ServerError},
    extract::FormFields,
    response::ApiJson,
    state::AppState,
};
use axum::extract::State;
use melody_core::types::{RegisterUser, User, UserId};

/// POST /login
/// Log in with a secret code
pub async fn login(
    State(app_state): State<AppState>,
    fields: FormFields,
) -> Result<ApiJson<User>> {
    let [secret_code] = fields.required(["secret_code"], "Secret code is required")?;

    let user = app_state
        .storage
        .find_user_by_secret_code(secret_code)
        .await?
        .ok_or_else(|| ServerError::NotFound("User not found".to_string()))?;

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(ApiJson(user))
}

/// POST /register
/// Create an account; the response carries the new secret code
pub async fn register(
    State(app_state): State<AppState>,
    fields: FormFields,
) -> Result<ApiJson<User>> {
    let [name, email] = fields.required(["name", "email"], "Name and email are required")?;

    let user = app_state
        .storage
        .register_user(RegisterUser {
            name: name.to_string(),
            email: email.to_string(),
        })
        .await?;

    tracing::info!(user_id = %user.id, "Registered user");
    Ok(ApiJson(user))
}

/// GET /viewProfile
/// Get a user with all their playlists and songs
pub async fn view_profile(
    State(app_state): State<AppState>,
    fields: FormFields,
) -> Result<ApiJson<User>> {
    let [user_id] = fields.required(["user_id"], "User ID is required")?;

    let user = app_state
        .storage
        .find_user(&UserId::new(user_id))
        .await?
        .ok_or_else(|| ServerError::NotFound("User not found".to_string()))?;

    Ok(ApiJson(user))
}
