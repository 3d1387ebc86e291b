//! Recommendation Engine: turns a gap analysis into a phased, resource-backed
//! learning plan with a week-by-week timeline.
//!
//! Pipeline: gaps → per-skill resource selection → phases → timeline → summary.
//! Every step is a pure transform over the read-only taxonomy and catalog.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::gaps::{GapAnalysis, GapAnalyzer, GapCategory, GapOptions, SkillGap};
use crate::models::{CandidateProfile, JobRequirements, Proficiency};
use crate::recommendation::catalog::{ResourceCatalog, ResourceEntry};
use crate::recommendation::matcher::{LearningPreferences, LevelRange, RankedResource, ResourceMatcher};
use crate::recommendation::phases::{build_phases, LearningPhase};
use crate::recommendation::summary::{build_summary, PlanSummary};
use crate::recommendation::timeline::{build_timeline, completion_date, WeeklySchedule};
use crate::taxonomy::Taxonomy;

const MAX_ALTERNATIVES: usize = 2;
const MIN_COMPLETION_HOURS: f64 = 1.0;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A catalog entry chosen for a skill, with why it was chosen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedResource {
    #[serde(flatten)]
    pub resource: ResourceEntry,
    pub relevance_score: f64,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecommendation {
    pub skill_name: String,
    pub category: GapCategory,
    pub priority_score: f64,
    pub current_level: Option<Proficiency>,
    pub target_level: Proficiency,
    /// `None` when no catalog entry survives the learner's filters.
    pub primary_resource: Option<RecommendedResource>,
    pub alternatives: Vec<RecommendedResource>,
    pub estimated_hours: f64,
}

impl SkillRecommendation {
    pub fn resource_title(&self) -> &str {
        self.primary_resource
            .as_ref()
            .map(|r| r.resource.title.as_str())
            .unwrap_or("Self-directed study")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    pub job_title: String,
    pub readiness_score: f64,
    pub total_gaps: usize,
    pub total_hours: f64,
    pub weekly_hours: f64,
    pub total_weeks: usize,
    pub estimated_completion_date: NaiveDate,
    pub phases: Vec<LearningPhase>,
    pub timeline: Vec<WeeklySchedule>,
    pub matched_skills: Vec<String>,
    pub summary: PlanSummary,
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

pub struct RecommendationEngine {
    taxonomy: Arc<Taxonomy>,
    catalog: Arc<ResourceCatalog>,
    analyzer: GapAnalyzer,
}

impl RecommendationEngine {
    pub fn new(taxonomy: Arc<Taxonomy>, catalog: Arc<ResourceCatalog>) -> Self {
        let analyzer = GapAnalyzer::new(taxonomy.clone());
        Self {
            taxonomy,
            catalog,
            analyzer,
        }
    }

    pub fn recommend(
        &self,
        profile: &CandidateProfile,
        job: &JobRequirements,
        prefs: &LearningPreferences,
    ) -> LearningPlan {
        self.recommend_on(profile, job, prefs, Utc::now().date_naive())
    }

    /// Same as `recommend`, with the plan's start date supplied by the caller.
    pub fn recommend_on(
        &self,
        profile: &CandidateProfile,
        job: &JobRequirements,
        prefs: &LearningPreferences,
        today: NaiveDate,
    ) -> LearningPlan {
        let options = GapOptions {
            include_related: prefs.include_related_skills,
        };
        let analysis = self.analyzer.analyze(profile, job, options);
        self.plan_from_gaps(&job.title, analysis, prefs, today)
    }

    /// Builds the plan for an existing gap analysis.
    pub fn plan_from_gaps(
        &self,
        job_title: &str,
        analysis: GapAnalysis,
        prefs: &LearningPreferences,
        today: NaiveDate,
    ) -> LearningPlan {
        let weekly_hours = prefs.weekly_hours();

        let recommendations: Vec<SkillRecommendation> = analysis
            .all_gaps()
            .map(|gap| self.recommend_skill(gap, prefs))
            .collect();

        let phases = build_phases(recommendations, weekly_hours);
        let timeline = build_timeline(&phases, weekly_hours);
        let total_weeks = timeline.len();
        let total_hours = round1(phases.iter().map(|p| p.total_hours).sum());
        let summary = build_summary(&phases, analysis.critical_gap_count, total_weeks);

        debug!(
            "Learning plan for '{job_title}': {} phases, {total_weeks} weeks, {total_hours}h",
            phases.len()
        );

        LearningPlan {
            job_title: job_title.to_string(),
            readiness_score: analysis.readiness_score,
            total_gaps: analysis.total_gaps,
            total_hours,
            weekly_hours,
            total_weeks,
            estimated_completion_date: completion_date(prefs.target_date, today, total_weeks),
            phases,
            timeline,
            matched_skills: analysis.matched_skills,
            summary,
        }
    }

    /// Ranked catalog entries for a single skill, used by the resource browser.
    pub fn resources_for(
        &self,
        skill: &str,
        levels: LevelRange,
        prefs: &LearningPreferences,
    ) -> Vec<RecommendedResource> {
        let matcher = ResourceMatcher::new(&self.catalog, self.taxonomy.aliases());
        matcher
            .rank(skill, levels, prefs)
            .iter()
            .map(|ranked| recommended(ranked, skill, prefs))
            .collect()
    }

    fn recommend_skill(&self, gap: &SkillGap, prefs: &LearningPreferences) -> SkillRecommendation {
        let matcher = ResourceMatcher::new(&self.catalog, self.taxonomy.aliases());
        let levels = LevelRange {
            current: gap.current_level,
            target: gap.target_level,
        };
        let ranked = matcher.rank(&gap.skill_name, levels, prefs);
        if ranked.is_empty() {
            warn!("No catalog resources for '{}' after filtering", gap.skill_name);
        }

        let primary = ranked.first();
        let alternatives: Vec<RecommendedResource> = match primary {
            Some(first) => ranked
                .iter()
                .skip(1)
                .filter(|r| {
                    r.entry.resource_type != first.entry.resource_type
                        || !r.entry.provider.eq_ignore_ascii_case(&first.entry.provider)
                })
                .take(MAX_ALTERNATIVES)
                .map(|r| recommended(r, &gap.skill_name, prefs))
                .collect(),
            None => Vec::new(),
        };

        let estimated_hours = primary
            .and_then(|r| r.entry.duration_hours)
            .filter(|h| *h > 0.0)
            .map(|hours| {
                round1((hours * level_discount(gap.current_level)).max(MIN_COMPLETION_HOURS))
            })
            .unwrap_or(gap.estimated_learning_hours);

        SkillRecommendation {
            skill_name: gap.skill_name.clone(),
            category: gap.category,
            priority_score: gap.priority_score,
            current_level: gap.current_level,
            target_level: gap.target_level,
            primary_resource: primary.map(|r| recommended(r, &gap.skill_name, prefs)),
            alternatives,
            estimated_hours,
        }
    }
}

/// Share of a resource's stated duration still needed at the learner's current level.
fn level_discount(current: Option<Proficiency>) -> f64 {
    match current {
        None => 1.0,
        Some(Proficiency::Beginner) => 0.70,
        Some(Proficiency::Intermediate) => 0.40,
        Some(Proficiency::Advanced) | Some(Proficiency::Expert) => 0.15,
    }
}

fn recommended(
    ranked: &RankedResource<'_>,
    skill: &str,
    prefs: &LearningPreferences,
) -> RecommendedResource {
    RecommendedResource {
        resource: ranked.entry.clone(),
        relevance_score: ranked.relevance,
        reason: build_reason(ranked, skill, prefs),
    }
}

/// Short human-readable explanation of why a resource was picked.
fn build_reason(ranked: &RankedResource<'_>, skill: &str, prefs: &LearningPreferences) -> String {
    let entry = ranked.entry;
    let mut parts = vec![if ranked.primary_match {
        format!("Focused on {skill}")
    } else {
        format!("Also covers {skill}")
    }];

    if entry.cost_type.is_free() {
        parts.push("free".to_string());
    }
    if prefs.prefer_hands_on && entry.hands_on {
        parts.push("hands-on".to_string());
    }
    if prefs.prefer_certificate && entry.has_certificate {
        parts.push("includes a certificate".to_string());
    }
    if entry.rating > 0.0 {
        parts.push(format!("rated {:.1}/5", entry.rating));
    }

    parts.join("; ")
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
