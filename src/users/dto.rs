use serde::{Deserialize, Serialize};

use crate::plans::dto::{ExercisePlanSummary, NutritionPlanDto};
use crate::plans::repo::{ExercisePlanRow, NutritionPlanRow};
use crate::users::repo::UserProfile;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveUserRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub gender: String,
    pub height: f64,
    pub curr_weight: f64,
    pub desired_weight: f64,
    pub target_days: i32,
}

impl SaveUserRequest {
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            user_id: self.user_id.unwrap_or_default(),
            name: self.name,
            email: self.email,
            age: self.age,
            gender: self.gender,
            height: self.height,
            curr_weight: self.curr_weight,
            desired_weight: self.desired_weight,
            target_days: self.target_days,
        }
    }
}

/// Profile payload with one-directional plan embedding: plan summaries carry
/// no reverse link back to the profile.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub gender: String,
    pub height: f64,
    pub curr_weight: f64,
    pub desired_weight: f64,
    pub target_days: i32,
    pub exercise_plans: Vec<ExercisePlanSummary>,
    pub nutrition_plans: Vec<NutritionPlanDto>,
}

impl UserProfileResponse {
    pub fn from_parts(
        profile: UserProfile,
        exercise_plans: Vec<ExercisePlanRow>,
        nutrition_plans: Vec<NutritionPlanRow>,
    ) -> Self {
        Self {
            user_id: profile.user_id,
            name: profile.name,
            email: profile.email,
            age: profile.age,
            gender: profile.gender,
            height: profile.height,
            curr_weight: profile.curr_weight,
            desired_weight: profile.desired_weight,
            target_days: profile.target_days,
            exercise_plans: exercise_plans
                .into_iter()
                .map(ExercisePlanSummary::from)
                .collect(),
            nutrition_plans: nutrition_plans
                .into_iter()
                .map(NutritionPlanDto::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_request_without_user_id() {
        let json = r#"{
            "name": "Ann",
            "email": "ann@example.com",
            "age": 30,
            "gender": "FEMALE",
            "height": 165.0,
            "currWeight": 70.0,
            "desiredWeight": 60.0,
            "targetDays": 100
        }"#;
        let req: SaveUserRequest = serde_json::from_str(json).unwrap();
        assert!(req.user_id.is_none());
        let profile = req.into_profile();
        assert!(profile.user_id.is_empty());
        assert_eq!(profile.curr_weight, 70.0);
        assert_eq!(profile.target_days, 100);
    }

    #[test]
    fn test_save_request_keeps_supplied_id() {
        let json = r#"{
            "userId": "existing-id",
            "name": "Bob",
            "email": "bob@example.com",
            "age": 40,
            "gender": "MALE",
            "height": 180.0,
            "currWeight": 90.0,
            "desiredWeight": 85.0,
            "targetDays": 60
        }"#;
        let req: SaveUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.into_profile().user_id, "existing-id");
    }

    #[test]
    fn test_profile_response_wire_shape() {
        let profile = UserProfile {
            user_id: "u-1".into(),
            name: "Ann".into(),
            email: "ann@example.com".into(),
            age: 30,
            gender: "FEMALE".into(),
            height: 165.0,
            curr_weight: 70.0,
            desired_weight: 60.0,
            target_days: 100,
        };
        let json =
            serde_json::to_value(UserProfileResponse::from_parts(profile, vec![], vec![])).unwrap();
        assert_eq!(json["userId"], "u-1");
        assert_eq!(json["currWeight"], 70.0);
        assert_eq!(json["desiredWeight"], 60.0);
        assert_eq!(json["targetDays"], 100);
        assert!(json["exercisePlans"].as_array().unwrap().is_empty());
        assert!(json["nutritionPlans"].as_array().unwrap().is_empty());
    }
}
