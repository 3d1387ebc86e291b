//! Axum route handlers for direct taxonomy access.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::{ApiResponse, AppError, AppJson, AppQuery};
use crate::state::AppState;
use crate::taxonomy::{ExtractionResult, NormalizeResult, SearchFilter, SkillDomain, SkillNode};

const DEFAULT_SEARCH_LIMIT: usize = 20;
const MAX_SEARCH_LIMIT: usize = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NormalizeRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeResponse {
    pub results: Vec<NormalizeResult>,
    pub matched_count: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExtractRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub include_unknown: bool,
}

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub domain: Option<SkillDomain>,
    pub category: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SkillNode>,
    pub count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/taxonomy/normalize
pub async fn handle_normalize(
    State(state): State<AppState>,
    AppJson(req): AppJson<NormalizeRequest>,
) -> Result<Json<ApiResponse<NormalizeResponse>>, AppError> {
    if req.skills.is_empty() {
        return Err(AppError::Validation("skills cannot be empty".to_string()));
    }

    let results: Vec<NormalizeResult> = req
        .skills
        .iter()
        .map(|raw| state.taxonomy.normalize(raw))
        .collect();
    let matched_count = results.iter().filter(|r| r.is_match()).count();

    Ok(ApiResponse::ok(NormalizeResponse {
        results,
        matched_count,
    }))
}

/// POST /api/v1/taxonomy/extract
///
/// Empty text is not an error; it yields an empty result.
pub async fn handle_extract(
    State(state): State<AppState>,
    AppJson(req): AppJson<ExtractRequest>,
) -> Result<Json<ApiResponse<ExtractionResult>>, AppError> {
    Ok(ApiResponse::ok(
        state.taxonomy.extract(&req.text, req.include_unknown),
    ))
}

/// GET /api/v1/taxonomy/lookup?id=
pub async fn handle_lookup(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LookupQuery>,
) -> Result<Json<ApiResponse<SkillNode>>, AppError> {
    let id = params.id.as_deref().map(str::trim).unwrap_or_default();
    if id.is_empty() {
        return Err(AppError::Validation("id is required".to_string()));
    }

    state
        .taxonomy
        .lookup(id)
        .cloned()
        .map(ApiResponse::ok)
        .ok_or_else(|| AppError::NotFound(format!("Skill '{id}' not found")))
}

/// GET /api/v1/taxonomy/search?q=&domain=&category=&limit=
pub async fn handle_search(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchQuery>,
) -> Result<Json<ApiResponse<SearchResponse>>, AppError> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .clamp(1, MAX_SEARCH_LIMIT);

    let filter = SearchFilter {
        query: &params.q,
        domain: params.domain,
        category: params.category.as_deref(),
        limit,
    };
    let results: Vec<SkillNode> = state.taxonomy.search(&filter).into_iter().cloned().collect();

    Ok(ApiResponse::ok(SearchResponse {
        query: params.q.clone(),
        count: results.len(),
        results,
    }))
}
