//! Axum route handlers for learning plans and resource browsing.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::{ApiResponse, AppError, AppJson, AppQuery};
use crate::models::{CandidateProfile, JobRequirements, Proficiency};
use crate::recommendation::engine::{LearningPlan, RecommendedResource};
use crate::recommendation::matcher::{LearningPreferences, LevelRange};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecommendRequest {
    pub profile: CandidateProfile,
    pub job: JobRequirements,
    #[serde(default)]
    pub preferences: LearningPreferences,
}

#[derive(Debug, Deserialize)]
pub struct ResourceQuery {
    pub skill: Option<String>,
    #[serde(default)]
    pub free: bool,
}

/// POST /api/v1/recommend
///
/// Full pipeline: gap analysis → resource selection → phases → timeline.
pub async fn handle_recommend(
    State(state): State<AppState>,
    AppJson(req): AppJson<RecommendRequest>,
) -> Result<Json<ApiResponse<LearningPlan>>, AppError> {
    let plan = state
        .engine
        .recommend(&req.profile, &req.job, &req.preferences);
    Ok(ApiResponse::ok(plan))
}

/// GET /api/v1/resources?skill=&free=
///
/// Catalog entries for one skill, ranked for a beginner working towards
/// intermediate.
pub async fn handle_resources(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ResourceQuery>,
) -> Result<Json<ApiResponse<Vec<RecommendedResource>>>, AppError> {
    let skill = params.skill.as_deref().map(str::trim).unwrap_or_default();
    if skill.is_empty() {
        return Err(AppError::Validation("skill is required".to_string()));
    }

    let prefs = LearningPreferences {
        free_only: params.free,
        ..Default::default()
    };
    let levels = LevelRange {
        current: Some(Proficiency::Beginner),
        target: Proficiency::Intermediate,
    };
    Ok(ApiResponse::ok(state.engine.resources_for(skill, levels, &prefs)))
}
