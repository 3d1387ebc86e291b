//! Acceptance-likelihood scorer: weighted blend of the five component scores.
//!
//! Deterministic and stateless: the only shared input is the read-only taxonomy
//! used for alias resolution.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CandidateProfile, JobRequirements};
use crate::scoring::components::{
    score_education_match, score_experience_match, score_industry_relevance,
    score_location_fit, score_skill_match,
};
use crate::taxonomy::Taxonomy;

/// Component weights. Must sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub skill_match: f64,
    pub experience_match: f64,
    pub education_match: f64,
    pub location_fit: f64,
    pub industry_relevance: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skill_match: 0.35,
            experience_match: 0.25,
            education_match: 0.15,
            location_fit: 0.10,
            industry_relevance: 0.15,
        }
    }
}

/// Full score report returned to callers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub overall_score: f64, // 0 – 100
    pub skill_match_score: f64,
    pub experience_match_score: f64,
    pub education_match_score: f64,
    pub location_fit_score: f64,
    pub industry_relevance_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_preferred_skills: Vec<String>,
    pub recommendation: String,
}

pub struct AcceptanceScorer {
    taxonomy: Arc<Taxonomy>,
    weights: ScoreWeights,
}

impl AcceptanceScorer {
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self::with_weights(taxonomy, ScoreWeights::default())
    }

    pub fn with_weights(taxonomy: Arc<Taxonomy>, weights: ScoreWeights) -> Self {
        Self { taxonomy, weights }
    }

    pub fn score(&self, profile: &CandidateProfile, job: &JobRequirements) -> ScoreBreakdown {
        let skills = score_skill_match(self.taxonomy.aliases(), profile, job);
        let experience = score_experience_match(profile, job);
        let education = score_education_match(profile, job);
        let location = score_location_fit(profile, job);
        let industry = score_industry_relevance(profile, job);

        let w = &self.weights;
        let weighted = skills.score * w.skill_match
            + experience * w.experience_match
            + education * w.education_match
            + location * w.location_fit
            + industry * w.industry_relevance;
        let overall_score = round1((weighted * 100.0).clamp(0.0, 100.0));

        debug!(
            "Scored '{}': overall={overall_score} skills={:.2} exp={:.2} edu={:.2} loc={:.2} ind={:.2}",
            job.title, skills.score, experience, education, location, industry
        );

        let recommendation = build_recommendation(overall_score, &skills.missing);

        ScoreBreakdown {
            overall_score,
            skill_match_score: skills.score,
            experience_match_score: experience,
            education_match_score: education,
            location_fit_score: location,
            industry_relevance_score: industry,
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            matched_preferred_skills: skills.matched_preferred,
            recommendation,
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Builds a human-readable recommendation line from the score and missing skills.
fn build_recommendation(score: f64, missing: &[String]) -> String {
    let top_missing: Vec<&str> = missing.iter().take(3).map(String::as_str).collect();

    if score >= 80.0 {
        "Strong match. Your profile covers the key requirements for this role.".to_string()
    } else if score >= 60.0 {
        if top_missing.is_empty() {
            format!("Moderate match ({score:.0}/100). Strengthen experience or credentials to stand out.")
        } else {
            format!(
                "Moderate match ({score:.0}/100). Closing these gaps would help: {}.",
                top_missing.join(", ")
            )
        }
    } else if top_missing.is_empty() {
        format!("Low match ({score:.0}/100). Experience, education or location are holding this back.")
    } else {
        format!(
            "Low match ({score:.0}/100). Significant gaps: {}.",
            top_missing.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::ExperienceLevel;
    use crate::models::profile::{DegreeLevel, Education, WorkHistory};
    use crate::models::{CandidateSkill, LocationType, Proficiency};

    fn scorer() -> AcceptanceScorer {
        AcceptanceScorer::new(Arc::new(Taxonomy::builtin().unwrap()))
    }

    fn strong_profile() -> CandidateProfile {
        CandidateProfile {
            skills: vec![
                CandidateSkill::new("Go", Some(Proficiency::Expert)),
                CandidateSkill::new("Python", Some(Proficiency::Advanced)),
                CandidateSkill::new("k8s", Some(Proficiency::Advanced)),
            ],
            total_years_experience: Some(7.0),
            work_history: vec![WorkHistory {
                title: "Senior Backend Engineer".to_string(),
                industry: Some("fintech".to_string()),
                duration_months: 84,
            }],
            education: vec![Education {
                degree: DegreeLevel::Bachelor,
                field: Some("Computer Science".to_string()),
            }],
            ..Default::default()
        }
    }

    fn backend_job() -> JobRequirements {
        JobRequirements {
            title: "Backend Engineer".to_string(),
            required_skills: vec!["Go".to_string(), "Python".to_string(), "Rust".to_string()],
            preferred_skills: vec!["Kubernetes".to_string()],
            min_years_experience: Some(5.0),
            required_degree: Some(DegreeLevel::Bachelor),
            location_type: Some(LocationType::Remote),
            industry: Some("fintech".to_string()),
            experience_level: Some(ExperienceLevel::Senior),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = ScoreWeights::default();
        let sum = w.skill_match
            + w.experience_match
            + w.education_match
            + w.location_fit
            + w.industry_relevance;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_lists_matched_and_missing() {
        let breakdown = scorer().score(&strong_profile(), &backend_job());
        assert_eq!(breakdown.matched_skills, vec!["Go", "Python"]);
        assert_eq!(breakdown.missing_skills, vec!["Rust"]);
        assert_eq!(breakdown.matched_preferred_skills, vec!["Kubernetes"]);
        assert!(breakdown.recommendation.starts_with("Strong match"), "got {}", breakdown.overall_score);
    }

    #[test]
    fn test_overall_is_weighted_sum() {
        let breakdown = scorer().score(&strong_profile(), &backend_job());
        let expected = breakdown.skill_match_score * 0.35
            + breakdown.experience_match_score * 0.25
            + breakdown.education_match_score * 0.15
            + breakdown.location_fit_score * 0.10
            + breakdown.industry_relevance_score * 0.15;
        assert!((breakdown.overall_score - expected * 100.0).abs() <= 0.05);
    }

    #[test]
    fn test_scores_bounded_for_empty_inputs() {
        let breakdown = scorer().score(&CandidateProfile::default(), &JobRequirements::default());
        assert!((0.0..=100.0).contains(&breakdown.overall_score));
        for component in [
            breakdown.skill_match_score,
            breakdown.experience_match_score,
            breakdown.education_match_score,
            breakdown.location_fit_score,
            breakdown.industry_relevance_score,
        ] {
            assert!((0.0..=1.0).contains(&component), "component {component} out of range");
        }
    }

    #[test]
    fn test_scores_bounded_for_weak_candidate() {
        let breakdown = scorer().score(&CandidateProfile::default(), &backend_job());
        assert!((0.0..=100.0).contains(&breakdown.overall_score));
        assert!(breakdown.skill_match_score < 0.3);
        assert!(breakdown.recommendation.starts_with("Low match"));
    }

    #[test]
    fn test_recommendation_lists_at_most_three_gaps() {
        let missing: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        let rec = build_recommendation(40.0, &missing);
        assert!(rec.contains("A, B, C"));
        assert!(!rec.contains('D'));
    }
}
