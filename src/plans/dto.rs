use serde::Serialize;
use time::OffsetDateTime;

use crate::plans::repo::{ExercisePlanRow, ExerciseSetRow, NutritionPlanRow};

// Wire shapes match the original service: camelCase keys, no reverse link
// from a plan back to its owning profile.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSetDto {
    pub id: i64,
    pub name: String,
    pub equipment: String,
    pub duration_minutes: i32,
    pub sessions_per_week: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePlanDto {
    pub id: i64,
    pub goal: String,
    pub daily_calorie_change: f64,
    pub exercise_sets: Vec<ExerciseSetDto>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Exercise plan as embedded in a profile payload: no sets.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePlanSummary {
    pub id: i64,
    pub goal: String,
    pub daily_calorie_change: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPlanDto {
    pub id: i64,
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
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanResponse {
    pub exercise_plan: ExercisePlanDto,
    pub nutrition_plan: NutritionPlanDto,
}

impl From<ExerciseSetRow> for ExerciseSetDto {
    fn from(r: ExerciseSetRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            equipment: r.equipment,
            duration_minutes: r.duration_minutes,
            sessions_per_week: r.sessions_per_week,
        }
    }
}

impl From<ExercisePlanRow> for ExercisePlanSummary {
    fn from(r: ExercisePlanRow) -> Self {
        Self {
            id: r.id,
            goal: r.goal,
            daily_calorie_change: r.daily_calorie_change,
            created_at: r.created_at,
        }
    }
}

impl From<NutritionPlanRow> for NutritionPlanDto {
    fn from(r: NutritionPlanRow) -> Self {
        Self {
            id: r.id,
            daily_calories_to_eat: r.daily_calories_to_eat,
            breakfast_calories: r.breakfast_calories,
            lunch_calories: r.lunch_calories,
            dinner_calories: r.dinner_calories,
            pre_workout_calories: r.pre_workout_calories,
            post_workout_calories: r.post_workout_calories,
            breakfast_foods: r.breakfast_foods,
            lunch_foods: r.lunch_foods,
            dinner_foods: r.dinner_foods,
            pre_workout_foods: r.pre_workout_foods,
            post_workout_foods: r.post_workout_foods,
            created_at: r.created_at,
        }
    }
}

impl ExercisePlanDto {
    pub fn from_rows(plan: ExercisePlanRow, sets: Vec<ExerciseSetRow>) -> Self {
        Self {
            id: plan.id,
            goal: plan.goal,
            daily_calorie_change: plan.daily_calorie_change,
            exercise_sets: sets.into_iter().map(ExerciseSetDto::from).collect(),
            created_at: plan.created_at,
        }
    }
}

impl DietPlanResponse {
    pub fn from_rows(
        plan: ExercisePlanRow,
        sets: Vec<ExerciseSetRow>,
        nutrition: NutritionPlanRow,
    ) -> Self {
        Self {
            exercise_plan: ExercisePlanDto::from_rows(plan, sets),
            nutrition_plan: NutritionPlanDto::from(nutrition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample_response() -> DietPlanResponse {
        let plan = ExercisePlanRow {
            id: 1,
            user_id: "u-1".into(),
            goal: "LOSE_WEIGHT".into(),
            daily_calorie_change: -770.0,
            created_at: datetime!(2024-01-15 10:00 UTC),
        };
        let sets = vec![ExerciseSetRow {
            id: 11,
            exercise_plan_id: 1,
            name: "Brisk Walking".into(),
            equipment: "None".into(),
            duration_minutes: 30,
            sessions_per_week: 5,
        }];
        let nutrition = NutritionPlanRow {
            id: 2,
            user_id: "u-1".into(),
            daily_calories_to_eat: 1200.0,
            breakfast_calories: 300.0,
            lunch_calories: 420.0,
            dinner_calories: 300.0,
            pre_workout_calories: 90.0,
            post_workout_calories: 90.0,
            breakfast_foods: vec!["Oats".into()],
            lunch_foods: vec!["Curd".into()],
            dinner_foods: vec!["Salad".into()],
            pre_workout_foods: vec!["Banana".into()],
            post_workout_foods: vec!["Milk / Boiled Eggs".into()],
            created_at: datetime!(2024-01-15 10:00 UTC),
        };
        DietPlanResponse::from_rows(plan, sets, nutrition)
    }

    #[test]
    fn test_diet_plan_wire_shape() {
        let json = serde_json::to_value(sample_response()).unwrap();

        assert!(json.get("exercisePlan").is_some());
        assert!(json.get("nutritionPlan").is_some());

        let exercise = &json["exercisePlan"];
        assert_eq!(exercise["goal"], "LOSE_WEIGHT");
        assert_eq!(exercise["dailyCalorieChange"], -770.0);
        assert_eq!(exercise["exerciseSets"][0]["durationMinutes"], 30);
        assert_eq!(exercise["exerciseSets"][0]["sessionsPerWeek"], 5);
        // No back-reference to the owning profile on the wire.
        assert!(exercise.get("userId").is_none());
        assert!(exercise["exerciseSets"][0].get("exercisePlanId").is_none());

        let nutrition = &json["nutritionPlan"];
        assert_eq!(nutrition["dailyCaloriesToEat"], 1200.0);
        assert_eq!(nutrition["preWorkoutCalories"], 90.0);
        assert_eq!(nutrition["postWorkoutFoods"][0], "Milk / Boiled Eggs");
        assert!(nutrition.get("userId").is_none());
    }

    #[test]
    fn test_created_at_is_rfc3339() {
        let json = serde_json::to_value(sample_response()).unwrap();
        assert_eq!(
            json["exercisePlan"]["createdAt"],
            "2024-01-15T10:00:00Z"
        );
    }
}
