use tracing::{debug, info};

use crate::error::ApiError;
use crate::plans::dto::DietPlanResponse;
use crate::plans::generator;
use crate::plans::repo::{self, ExercisePlanRow, ExerciseSetRow, NutritionPlanRow};
use crate::state::AppState;
use crate::users::repo::UserProfile;

/// Returns the user's current plan pair, generating and persisting one if
/// needed.
///
/// The two "most recent" lookups are independent and both must hit for the
/// stored pair to be reused; otherwise a full fresh pair is generated, even
/// if one plan type already exists. There is no invalidation: editing the
/// profile later does not refresh an existing pair. Concurrent calls for
/// the same user can each insert a pair; later reads see the most recent
/// one.
pub async fn get_or_create_diet_plan(
    state: &AppState,
    user_id: &str,
) -> Result<DietPlanResponse, ApiError> {
    let profile = UserProfile::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user", user_id))?;

    let latest_exercise = ExercisePlanRow::latest_for_user(&state.db, user_id).await?;
    let latest_nutrition = NutritionPlanRow::latest_for_user(&state.db, user_id).await?;

    if let (Some(exercise), Some(nutrition)) = (latest_exercise, latest_nutrition) {
        debug!(user_id, exercise_plan_id = exercise.id, nutrition_plan_id = nutrition.id,
            "reusing stored plan pair");
        let sets = ExerciseSetRow::for_plan(&state.db, exercise.id).await?;
        return Ok(DietPlanResponse::from_rows(exercise, sets, nutrition));
    }

    let generated = generator::generate(&profile);
    let (exercise, sets, nutrition) = repo::insert_pair(&state.db, user_id, &generated).await?;
    info!(user_id, goal = generated.goal.as_str(), exercise_plan_id = exercise.id,
        "generated and stored new diet plan");

    Ok(DietPlanResponse::from_rows(exercise, sets, nutrition))
}
