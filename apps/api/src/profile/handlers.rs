//! Axum route handlers for the onboarding profile.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::ProfileRow;
use crate::profile::onboarding::{
    next_step, JobPreferences, PersonalInfo, ProfessionalInfo, SkillsInfo,
};
use crate::profile::store;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct OnboardingResponse {
    pub profile: ProfileRow,
    /// Step to show next; `None` once onboarding is complete.
    pub next_step: Option<u8>,
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProfileRow>, AppError> {
    let profile = store::get_profile(&state.db, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", params.user_id)))?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile/personal (step 1)
pub async fn handle_save_personal(
    State(state): State<AppState>,
    Json(request): Json<PersonalInfo>,
) -> Result<Json<OnboardingResponse>, AppError> {
    let info = request.validate()?;
    let profile = store::save_personal_info(&state.db, &info).await?;
    Ok(Json(OnboardingResponse {
        profile,
        next_step: next_step(1),
    }))
}

/// PUT /api/v1/profile/professional (step 2)
pub async fn handle_save_professional(
    State(state): State<AppState>,
    Json(request): Json<ProfessionalInfo>,
) -> Result<Json<OnboardingResponse>, AppError> {
    let (user_id, profession, level) = request.validate()?;
    let profile = store::save_professional_info(&state.db, user_id, &profession, level).await?;
    Ok(Json(OnboardingResponse {
        profile,
        next_step: next_step(2),
    }))
}

/// PUT /api/v1/profile/skills (step 3)
pub async fn handle_save_skills(
    State(state): State<AppState>,
    Json(request): Json<SkillsInfo>,
) -> Result<Json<OnboardingResponse>, AppError> {
    let info = request.validate()?;
    let profile = store::save_skills(&state.db, &info).await?;
    Ok(Json(OnboardingResponse {
        profile,
        next_step: next_step(3),
    }))
}

/// PUT /api/v1/profile/preferences (step 4)
pub async fn handle_save_preferences(
    State(state): State<AppState>,
    Json(request): Json<JobPreferences>,
) -> Result<Json<OnboardingResponse>, AppError> {
    let (user_id, job_types, salary) = request.validate()?;
    let profile = store::complete_onboarding(&state.db, user_id, &job_types, salary).await?;
    Ok(Json(OnboardingResponse {
        profile,
        next_step: next_step(4),
    }))
}
