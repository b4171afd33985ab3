use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub gender: String,
    pub height: f64,
    pub curr_weight: f64,
    pub desired_weight: f64,
    pub target_days: i32,
}

const PROFILE_COLUMNS: &str =
    "user_id, name, email, age, gender, height, curr_weight, desired_weight, target_days";

impl UserProfile {
    /// Insert-or-replace keyed by `user_id`. An empty incoming id gets a
    /// fresh UUID before the row is stored; ids never change afterwards.
    pub async fn save(db: &PgPool, mut profile: UserProfile) -> Result<UserProfile, sqlx::Error> {
        if profile.user_id.is_empty() {
            profile.user_id = Uuid::new_v4().to_string();
        }

        let saved = sqlx::query_as::<_, UserProfile>(
            r#"
            INSERT INTO user_profile
                (user_id, name, email, age, gender, height, curr_weight, desired_weight, target_days)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (user_id) DO UPDATE SET
                name = EXCLUDED.name,
                email = EXCLUDED.email,
                age = EXCLUDED.age,
                gender = EXCLUDED.gender,
                height = EXCLUDED.height,
                curr_weight = EXCLUDED.curr_weight,
                desired_weight = EXCLUDED.desired_weight,
                target_days = EXCLUDED.target_days
            RETURNING user_id, name, email, age, gender, height, curr_weight, desired_weight, target_days
            "#,
        )
        .bind(&profile.user_id)
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(profile.age)
        .bind(&profile.gender)
        .bind(profile.height)
        .bind(profile.curr_weight)
        .bind(profile.desired_weight)
        .bind(profile.target_days)
        .fetch_one(db)
        .await?;
        Ok(saved)
    }

    pub async fn find_by_id(db: &PgPool, user_id: &str) -> Result<Option<UserProfile>, sqlx::Error> {
        sqlx::query_as::<_, UserProfile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM user_profile WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    pub async fn find_all(db: &PgPool) -> Result<Vec<UserProfile>, sqlx::Error> {
        sqlx::query_as::<_, UserProfile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM user_profile ORDER BY user_id"
        ))
        .fetch_all(db)
        .await
    }

    /// Deletes the profile and everything it owns in one transaction.
    /// Owned rows go first; the schema has no ON DELETE CASCADE.
    /// Returns whether the profile row existed.
    pub async fn delete_by_id(db: &PgPool, user_id: &str) -> Result<bool, sqlx::Error> {
        let mut tx = db.begin().await?;

        sqlx::query(
            r#"
            DELETE FROM exercise_set
            WHERE exercise_plan_id IN (SELECT id FROM exercise_plan WHERE user_id = $1)
            "#,
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM exercise_plan WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM nutrition_plan WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM user_profile WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(deleted.rows_affected() > 0)
    }
}
