use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::error::ApiError;
use crate::plans::dto::DietPlanResponse;
use crate::plans::service;
use crate::state::AppState;

pub fn plan_routes() -> Router<AppState> {
    Router::new().route("/api/user/:user_id/diet-plan", get(get_diet_plan))
}

#[instrument(skip(state))]
pub async fn get_diet_plan(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<DietPlanResponse>, ApiError> {
    let response = service::get_or_create_diet_plan(&state, &user_id).await?;
    Ok(Json(response))
}
