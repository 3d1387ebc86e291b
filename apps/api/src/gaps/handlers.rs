use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::{ApiResponse, AppError, AppJson};
use crate::gaps::{GapAnalysis, GapOptions};
use crate::models::{CandidateProfile, JobRequirements};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GapRequest {
    pub profile: CandidateProfile,
    pub job: JobRequirements,
    #[serde(default)]
    pub include_related_skills: bool,
}

/// POST /api/v1/gaps
pub async fn handle_gaps(
    State(state): State<AppState>,
    AppJson(req): AppJson<GapRequest>,
) -> Result<Json<ApiResponse<GapAnalysis>>, AppError> {
    let options = GapOptions {
        include_related: req.include_related_skills,
    };
    let analysis = state.analyzer.analyze(&req.profile, &req.job, options);
    Ok(ApiResponse::ok(analysis))
}
