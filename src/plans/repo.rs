use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::plans::generator::GeneratedPlan;

#[derive(Debug, Clone, FromRow)]
pub struct ExercisePlanRow {
    pub id: i64,
    pub user_id: String,
    pub goal: String,
    pub daily_calorie_change: f64,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub struct ExerciseSetRow {
    pub id: i64,
    pub exercise_plan_id: i64,
    pub name: String,
    pub equipment: String,
    pub duration_minutes: i32,
    pub sessions_per_week: i32,
}

#[derive(Debug, Clone, FromRow)]
pub struct NutritionPlanRow {
    pub id: i64,
    pub user_id: String,
    pub daily_calories_to_eat: f64,
    pub breakfast_calories: f64,
    pub lunch_calories: f64,
    pub dinner_calories: f64,
    pub pre_workout_calories: f64,
    pub post_workout_calories: f64,
    pub breakfast_foods: Vec<String>,
    pub lunch_foods: Vec<String>,
    pub dinner_foods: Vec<String>,
    pub pre_workout_foods: Vec<String>,
    pub post_workout_foods: Vec<String>,
    pub created_at: OffsetDateTime,
}

const EXERCISE_PLAN_COLUMNS: &str = "id, user_id, goal, daily_calorie_change, created_at";

const NUTRITION_PLAN_COLUMNS: &str = "id, user_id, daily_calories_to_eat, breakfast_calories, \
     lunch_calories, dinner_calories, pre_workout_calories, post_workout_calories, \
     breakfast_foods, lunch_foods, dinner_foods, pre_workout_foods, post_workout_foods, created_at";

impl ExercisePlanRow {
    pub async fn latest_for_user(
        db: &PgPool,
        user_id: &str,
    ) -> Result<Option<ExercisePlanRow>, sqlx::Error> {
        sqlx::query_as::<_, ExercisePlanRow>(&format!(
            "SELECT {EXERCISE_PLAN_COLUMNS} FROM exercise_plan \
             WHERE user_id = $1 ORDER BY created_at DESC, id DESC LIMIT 1"
        ))
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    pub async fn list_for_user(
        db: &PgPool,
        user_id: &str,
    ) -> Result<Vec<ExercisePlanRow>, sqlx::Error> {
        sqlx::query_as::<_, ExercisePlanRow>(&format!(
            "SELECT {EXERCISE_PLAN_COLUMNS} FROM exercise_plan \
             WHERE user_id = $1 ORDER BY created_at, id"
        ))
        .bind(user_id)
        .fetch_all(db)
        .await
    }
}

impl ExerciseSetRow {
    pub async fn for_plan(db: &PgPool, plan_id: i64) -> Result<Vec<ExerciseSetRow>, sqlx::Error> {
        sqlx::query_as::<_, ExerciseSetRow>(
            r#"
            SELECT id, exercise_plan_id, name, equipment, duration_minutes, sessions_per_week
            FROM exercise_set
            WHERE exercise_plan_id = $1
            ORDER BY id
            "#,
        )
        .bind(plan_id)
        .fetch_all(db)
        .await
    }
}

impl NutritionPlanRow {
    pub async fn latest_for_user(
        db: &PgPool,
        user_id: &str,
    ) -> Result<Option<NutritionPlanRow>, sqlx::Error> {
        sqlx::query_as::<_, NutritionPlanRow>(&format!(
            "SELECT {NUTRITION_PLAN_COLUMNS} FROM nutrition_plan \
             WHERE user_id = $1 ORDER BY created_at DESC, id DESC LIMIT 1"
        ))
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    pub async fn list_for_user(
        db: &PgPool,
        user_id: &str,
    ) -> Result<Vec<NutritionPlanRow>, sqlx::Error> {
        sqlx::query_as::<_, NutritionPlanRow>(&format!(
            "SELECT {NUTRITION_PLAN_COLUMNS} FROM nutrition_plan \
             WHERE user_id = $1 ORDER BY created_at, id"
        ))
        .bind(user_id)
        .fetch_all(db)
        .await
    }
}

fn owned(foods: &[&str]) -> Vec<String> {
    foods.iter().map(|s| (*s).to_string()).collect()
}

/// Persists a freshly generated plan pair in one transaction. Rows are only
/// ever inserted; existing plans for the user are left untouched.
pub async fn insert_pair(
    db: &PgPool,
    user_id: &str,
    plan: &GeneratedPlan,
) -> Result<(ExercisePlanRow, Vec<ExerciseSetRow>, NutritionPlanRow), sqlx::Error> {
    let mut tx = db.begin().await?;

    let exercise = sqlx::query_as::<_, ExercisePlanRow>(&format!(
        "INSERT INTO exercise_plan (user_id, goal, daily_calorie_change) \
         VALUES ($1, $2, $3) RETURNING {EXERCISE_PLAN_COLUMNS}"
    ))
    .bind(user_id)
    .bind(plan.goal.as_str())
    .bind(plan.daily_calorie_change)
    .fetch_one(&mut *tx)
    .await?;

    let mut sets = Vec::with_capacity(plan.exercise_sets.len());
    for draft in plan.exercise_sets {
        let row = sqlx::query_as::<_, ExerciseSetRow>(
            r#"
            INSERT INTO exercise_set
                (exercise_plan_id, name, equipment, duration_minutes, sessions_per_week)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, exercise_plan_id, name, equipment, duration_minutes, sessions_per_week
            "#,
        )
        .bind(exercise.id)
        .bind(draft.name)
        .bind(draft.equipment)
        .bind(draft.duration_minutes)
        .bind(draft.sessions_per_week)
        .fetch_one(&mut *tx)
        .await?;
        sets.push(row);
    }

    let n = &plan.nutrition;
    let nutrition = sqlx::query_as::<_, NutritionPlanRow>(&format!(
        "INSERT INTO nutrition_plan \
            (user_id, daily_calories_to_eat, breakfast_calories, lunch_calories, \
             dinner_calories, pre_workout_calories, post_workout_calories, \
             breakfast_foods, lunch_foods, dinner_foods, pre_workout_foods, post_workout_foods) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
         RETURNING {NUTRITION_PLAN_COLUMNS}"
    ))
    .bind(user_id)
    .bind(n.daily_calories_to_eat)
    .bind(n.breakfast_calories)
    .bind(n.lunch_calories)
    .bind(n.dinner_calories)
    .bind(n.pre_workout_calories)
    .bind(n.post_workout_calories)
    .bind(owned(n.breakfast_foods))
    .bind(owned(n.lunch_foods))
    .bind(owned(n.dinner_foods))
    .bind(owned(n.pre_workout_foods))
    .bind(owned(n.post_workout_foods))
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok((exercise, sets, nutrition))
}
