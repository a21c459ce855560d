//! Profile persistence. One row per user in `profiles`; every onboarding step is an
//! upsert that touches only its own columns.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::profile::ProfileRow;
use crate::profile::onboarding::{ExperienceLevel, JobType, PersonalInfo, SalaryRange, SkillsInfo};

pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<ProfileRow>, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn save_personal_info(
    pool: &PgPool,
    info: &PersonalInfo,
) -> Result<ProfileRow, sqlx::Error> {
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO profiles (user_id, full_name, age, location)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id) DO UPDATE
            SET full_name = EXCLUDED.full_name,
                age = EXCLUDED.age,
                location = EXCLUDED.location,
                updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(info.user_id)
    .bind(&info.full_name)
    .bind(info.age)
    .bind(&info.location)
    .fetch_one(pool)
    .await?;

    info!("Saved personal info for user {}", info.user_id);
    Ok(row)
}

pub async fn save_professional_info(
    pool: &PgPool,
    user_id: Uuid,
    profession: &str,
    experience_level: ExperienceLevel,
) -> Result<ProfileRow, sqlx::Error> {
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO profiles (user_id, profession, experience_level)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id) DO UPDATE
            SET profession = EXCLUDED.profession,
                experience_level = EXCLUDED.experience_level,
                updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(profession)
    .bind(experience_level.as_str())
    .fetch_one(pool)
    .await?;

    info!("Saved professional info for user {user_id}");
    Ok(row)
}

pub async fn save_skills(pool: &PgPool, info: &SkillsInfo) -> Result<ProfileRow, sqlx::Error> {
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO profiles (user_id, skills)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE
            SET skills = EXCLUDED.skills,
                updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(info.user_id)
    .bind(&info.skills)
    .fetch_one(pool)
    .await?;

    info!("Saved {} skills for user {}", info.skills.len(), info.user_id);
    Ok(row)
}

/// Saves the final step and marks onboarding as completed.
pub async fn complete_onboarding(
    pool: &PgPool,
    user_id: Uuid,
    job_types: &[JobType],
    salary: SalaryRange,
) -> Result<ProfileRow, sqlx::Error> {
    let job_types: Vec<String> = job_types.iter().map(|t| t.as_str().to_string()).collect();

    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO profiles (user_id, preferred_job_types, salary_expectation, onboarding_completed)
        VALUES ($1, $2, $3, TRUE)
        ON CONFLICT (user_id) DO UPDATE
            SET preferred_job_types = EXCLUDED.preferred_job_types,
                salary_expectation = EXCLUDED.salary_expectation,
                onboarding_completed = TRUE,
                updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&job_types)
    .bind(salary.as_str())
    .fetch_one(pool)
    .await?;

    info!("Onboarding completed for user {user_id}");
    Ok(row)
}
