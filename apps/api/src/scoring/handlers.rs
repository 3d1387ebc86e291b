use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::{ApiResponse, AppError, AppJson};
use crate::models::{CandidateProfile, JobRequirements};
use crate::scoring::ScoreBreakdown;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScoreRequest {
    pub profile: CandidateProfile,
    pub job: JobRequirements,
}

/// POST /api/v1/score
///
/// Scores how likely the candidate is to be accepted for the job.
pub async fn handle_score(
    State(state): State<AppState>,
    AppJson(req): AppJson<ScoreRequest>,
) -> Result<Json<ApiResponse<ScoreBreakdown>>, AppError> {
    Ok(ApiResponse::ok(state.scorer.score(&req.profile, &req.job)))
}
