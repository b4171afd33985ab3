use lazy_static::lazy_static;
use regex::Regex;
use sqlx::PgPool;

use crate::plans::repo::{ExercisePlanRow, NutritionPlanRow};
use crate::users::dto::{SaveUserRequest, UserProfileResponse};
use crate::users::repo::UserProfile;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Presence and range checks from the data model. Anything past these is
/// out of scope for this service.
pub fn validate_profile(req: &SaveUserRequest) -> Result<(), String> {
    if req.name.trim().is_empty() {
        return Err("Name is required".into());
    }
    if req.email.trim().is_empty() {
        return Err("Email is required".into());
    }
    if !is_valid_email(req.email.trim()) {
        return Err("Invalid email address".into());
    }
    if req.age < 1 || req.age > 100 {
        return Err("Age must be between 1 and 100".into());
    }
    if req.gender.trim().is_empty() {
        return Err("Gender is required".into());
    }
    if req.height <= 0.0 {
        return Err("Height must be positive".into());
    }
    if req.curr_weight <= 0.0 {
        return Err("Current weight must be positive".into());
    }
    if req.desired_weight <= 0.0 {
        return Err("Desired weight must be positive".into());
    }
    if req.target_days <= 0 {
        return Err("Target days must be positive".into());
    }
    Ok(())
}

/// Assembles the outbound profile payload with its embedded plan summaries.
pub async fn profile_response(
    db: &PgPool,
    profile: UserProfile,
) -> Result<UserProfileResponse, sqlx::Error> {
    let exercise_plans = ExercisePlanRow::list_for_user(db, &profile.user_id).await?;
    let nutrition_plans = NutritionPlanRow::list_for_user(db, &profile.user_id).await?;
    Ok(UserProfileResponse::from_parts(
        profile,
        exercise_plans,
        nutrition_plans,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SaveUserRequest {
        SaveUserRequest {
            user_id: None,
            name: "Ann".into(),
            email: "ann@example.com".into(),
            age: 30,
            gender: "FEMALE".into(),
            height: 165.0,
            curr_weight: 70.0,
            desired_weight: 60.0,
            target_days: 100,
        }
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_validate_accepts_good_profile() {
        assert!(validate_profile(&valid_request()).is_ok());
    }

    #[test]
    fn test_validate_rejections() {
        let mut req = valid_request();
        req.name = "  ".into();
        assert_eq!(validate_profile(&req).unwrap_err(), "Name is required");

        let mut req = valid_request();
        req.email = "nope".into();
        assert_eq!(validate_profile(&req).unwrap_err(), "Invalid email address");

        let mut req = valid_request();
        req.age = 0;
        assert!(validate_profile(&req).is_err());
        req.age = 101;
        assert!(validate_profile(&req).is_err());
        req.age = 100;
        assert!(validate_profile(&req).is_ok());

        let mut req = valid_request();
        req.gender = "".into();
        assert_eq!(validate_profile(&req).unwrap_err(), "Gender is required");

        let mut req = valid_request();
        req.height = 0.0;
        assert!(validate_profile(&req).is_err());

        let mut req = valid_request();
        req.curr_weight = -1.0;
        assert!(validate_profile(&req).is_err());

        let mut req = valid_request();
        req.desired_weight = 0.0;
        assert!(validate_profile(&req).is_err());

        let mut req = valid_request();
        req.target_days = 0;
        assert!(validate_profile(&req).is_err());
    }
}
