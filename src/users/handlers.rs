use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::state::AppState;
use crate::users::dto::{SaveUserRequest, UserProfileResponse};
use crate::users::repo::UserProfile;
use crate::users::services::{profile_response, validate_profile};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/user/save", post(save_user))
        .route("/api/user", get(list_users))
        .route("/api/user/:user_id", get(get_user).delete(delete_user))
}

#[instrument(skip(state, payload))]
pub async fn save_user(
    State(state): State<AppState>,
    Json(payload): Json<SaveUserRequest>,
) -> Result<Json<UserProfileResponse>, ApiError> {
    if let Err(message) = validate_profile(&payload) {
        warn!(%message, "rejected profile payload");
        return Err(ApiError::Invalid(message));
    }

    let saved = UserProfile::save(&state.db, payload.into_profile()).await?;
    info!(user_id = %saved.user_id, email = %saved.email, "profile saved");

    let response = profile_response(&state.db, saved).await?;
    Ok(Json(response))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfileResponse>, ApiError> {
    let profile = UserProfile::find_by_id(&state.db, &user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user", &user_id))?;

    let response = profile_response(&state.db, profile).await?;
    Ok(Json(response))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserProfileResponse>>, ApiError> {
    let profiles = UserProfile::find_all(&state.db).await?;

    let mut responses = Vec::with_capacity(profiles.len());
    for profile in profiles {
        responses.push(profile_response(&state.db, profile).await?);
    }
    Ok(Json(responses))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    // Every delete failure is reported as a missing user; callers cannot
    // tell a genuinely absent row apart from another persistence error.
    match UserProfile::delete_by_id(&state.db, &user_id).await {
        Ok(true) => {
            info!(%user_id, "profile and owned plans deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        Ok(false) => {
            warn!(%user_id, "delete requested for unknown user");
            Err(ApiError::not_found("user", &user_id))
        }
        Err(e) => {
            warn!(%user_id, error = %e, "delete failed");
            Err(ApiError::not_found("user", &user_id))
        }
    }
}
