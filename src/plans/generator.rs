//! Derives an exercise plan and a nutrition plan from a user's biometric
//! profile. Pure computation over the profile; persistence is the caller's
//! job.

use crate::users::repo::UserProfile;

/// Roughly one kilogram of body mass in kcal.
pub const KCAL_PER_KG: f64 = 7700.0;

/// Weight deltas under half a kilo count as "already at goal".
pub const MAINTAIN_THRESHOLD_KG: f64 = 0.5;

/// Daily intake is never planned below this, regardless of deficit.
pub const MIN_DAILY_KCAL: f64 = 1200.0;

// Meal-slot shares of the daily intake; they sum to 1.0.
const BREAKFAST_SHARE: f64 = 0.25;
const LUNCH_SHARE: f64 = 0.35;
const DINNER_SHARE: f64 = 0.25;
const PRE_WORKOUT_SHARE: f64 = 0.075;
const POST_WORKOUT_SHARE: f64 = 0.075;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    LoseWeight,
    GainWeight,
    Maintain,
}

impl Goal {
    pub fn as_str(self) -> &'static str {
        match self {
            Goal::LoseWeight => "LOSE_WEIGHT",
            Goal::GainWeight => "GAIN_WEIGHT",
            Goal::Maintain => "MAINTAIN",
        }
    }

    pub fn detect(curr_weight: f64, desired_weight: f64) -> Goal {
        let diff = desired_weight - curr_weight;
        if diff.abs() < MAINTAIN_THRESHOLD_KG {
            Goal::Maintain
        } else if diff < 0.0 {
            Goal::LoseWeight
        } else {
            Goal::GainWeight
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseSetDraft {
    pub name: &'static str,
    pub equipment: &'static str,
    pub duration_minutes: i32,
    pub sessions_per_week: i32,
}

const fn set(
    name: &'static str,
    equipment: &'static str,
    duration_minutes: i32,
    sessions_per_week: i32,
) -> ExerciseSetDraft {
    ExerciseSetDraft {
        name,
        equipment,
        duration_minutes,
        sessions_per_week,
    }
}

const LOSE_WEIGHT_SETS: &[ExerciseSetDraft] = &[
    set("Brisk Walking", "None", 30, 5),
    set("Jumping Jacks", "Bodyweight", 15, 4),
    set("Bodyweight Squats", "Bodyweight", 15, 4),
    set("Plank", "Mat", 5, 5),
];

const GAIN_WEIGHT_SETS: &[ExerciseSetDraft] = &[
    set("Push Ups", "Bodyweight", 15, 4),
    set("Squats", "Bodyweight", 15, 4),
    set("Resistance Band Rows", "Band", 15, 3),
    set("Plank", "Mat", 5, 5),
];

const MAINTAIN_SETS: &[ExerciseSetDraft] = &[
    set("Walking", "None", 30, 4),
    set("Stretching", "Mat", 15, 5),
];

// Food suggestions are the same for every goal; only calories move.
const BREAKFAST_FOODS: &[&str] = &["Oats", "Boiled Eggs / Paneer", "Fruit"];
const LUNCH_FOODS: &[&str] = &["Rice / Roti", "Dal / Chicken", "Vegetables", "Curd"];
const DINNER_FOODS: &[&str] = &["Grilled Paneer / Chicken", "Salad"];
const PRE_WORKOUT_FOODS: &[&str] = &["Banana", "Black Coffee"];
const POST_WORKOUT_FOODS: &[&str] = &["Protein Shake", "Milk / Boiled Eggs"];

#[derive(Debug, Clone)]
pub struct NutritionDraft {
    pub daily_calories_to_eat: f64,
    pub breakfast_calories: f64,
    pub lunch_calories: f64,
    pub dinner_calories: f64,
    pub pre_workout_calories: f64,
    pub post_workout_calories: f64,
    pub breakfast_foods: &'static [&'static str],
    pub lunch_foods: &'static [&'static str],
    pub dinner_foods: &'static [&'static str],
    pub pre_workout_foods: &'static [&'static str],
    pub post_workout_foods: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub goal: Goal,
    /// Signed kcal/day: negative is a deficit, positive a surplus.
    pub daily_calorie_change: f64,
    pub exercise_sets: &'static [ExerciseSetDraft],
    pub nutrition: NutritionDraft,
}

fn exercise_sets_for(goal: Goal) -> &'static [ExerciseSetDraft] {
    match goal {
        Goal::LoseWeight => LOSE_WEIGHT_SETS,
        Goal::GainWeight => GAIN_WEIGHT_SETS,
        Goal::Maintain => MAINTAIN_SETS,
    }
}

/// Mifflin-St Jeor resting-burn estimate. Only "MALE" (any casing) selects
/// the male constant; every other gender string uses the female one, which
/// is the behavior the original service shipped with.
fn bmr(profile: &UserProfile) -> f64 {
    let base = 10.0 * profile.curr_weight + 6.25 * profile.height - 5.0 * f64::from(profile.age);
    if profile.gender.eq_ignore_ascii_case("MALE") {
        base + 5.0
    } else {
        base - 161.0
    }
}

pub fn generate(profile: &UserProfile) -> GeneratedPlan {
    let diff = profile.desired_weight - profile.curr_weight;
    let goal = Goal::detect(profile.curr_weight, profile.desired_weight);

    let total_calorie_change = KCAL_PER_KG * diff.abs();
    let mut daily_calorie_change = if profile.target_days > 0 {
        total_calorie_change / f64::from(profile.target_days)
    } else {
        0.0
    };
    if goal == Goal::LoseWeight {
        daily_calorie_change = -daily_calorie_change;
    }

    let daily_calories_to_eat = (bmr(profile) + daily_calorie_change).max(MIN_DAILY_KCAL);

    GeneratedPlan {
        goal,
        daily_calorie_change,
        exercise_sets: exercise_sets_for(goal),
        nutrition: NutritionDraft {
            daily_calories_to_eat,
            breakfast_calories: daily_calories_to_eat * BREAKFAST_SHARE,
            lunch_calories: daily_calories_to_eat * LUNCH_SHARE,
            dinner_calories: daily_calories_to_eat * DINNER_SHARE,
            pre_workout_calories: daily_calories_to_eat * PRE_WORKOUT_SHARE,
            post_workout_calories: daily_calories_to_eat * POST_WORKOUT_SHARE,
            breakfast_foods: BREAKFAST_FOODS,
            lunch_foods: LUNCH_FOODS,
            dinner_foods: DINNER_FOODS,
            pre_workout_foods: PRE_WORKOUT_FOODS,
            post_workout_foods: POST_WORKOUT_FOODS,
        },
    }
}
