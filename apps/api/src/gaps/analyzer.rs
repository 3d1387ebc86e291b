use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CandidateProfile, JobRequirements, Proficiency};
use crate::scoring::components::find_candidate_skill;
use crate::taxonomy::Taxonomy;

/// Learning hours needed per proficiency level climbed.
const HOURS_PER_LEVEL: f64 = 25.0;
/// Share of the estimate that related skills already held can remove.
const MAX_TRANSFER_DISCOUNT: f64 = 0.5;
const MIN_GAP_HOURS: f64 = 5.0;
const MAX_RELATED_GAPS: usize = 3;

/// Urgency bucket for a missing skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapCategory {
    Critical,
    Important,
    NiceToHave,
}

impl GapCategory {
    pub fn weight(&self) -> f64 {
        match self {
            GapCategory::Critical => 1.0,
            GapCategory::Important => 0.6,
            GapCategory::NiceToHave => 0.3,
        }
    }

    /// How strongly the job itself asks for skills in this bucket.
    fn job_weight(&self) -> f64 {
        match self {
            GapCategory::Critical => 1.0,
            GapCategory::Important => 0.5,
            GapCategory::NiceToHave => 0.2,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub skill_name: String,
    pub category: GapCategory,
    pub priority_score: f64,
    pub importance_score: f64,
    pub estimated_learning_hours: f64,
    pub transferability_score: f64,
    pub target_level: Proficiency,
    /// `None` when the skill is entirely absent from the profile.
    pub current_level: Option<Proficiency>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAnalysis {
    pub critical_gaps: Vec<SkillGap>,
    pub important_gaps: Vec<SkillGap>,
    pub nice_to_have_gaps: Vec<SkillGap>,
    pub matched_skills: Vec<String>,
    pub readiness_score: f64, // 0 – 100
    pub total_gaps: usize,
    pub critical_gap_count: usize,
    pub important_gap_count: usize,
}

impl GapAnalysis {
    /// All gaps in phase order: critical, important, nice-to-have.
    pub fn all_gaps(&self) -> impl Iterator<Item = &SkillGap> {
        self.critical_gaps
            .iter()
            .chain(&self.important_gaps)
            .chain(&self.nice_to_have_gaps)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GapOptions {
    /// Surface taxonomy-related skills of matched required skills as nice-to-have gaps.
    pub include_related: bool,
}

/// Outcome of checking one job skill against the profile.
enum Coverage {
    Met,
    Partial(Proficiency),
    Absent,
}

pub struct GapAnalyzer {
    taxonomy: Arc<Taxonomy>,
}

impl GapAnalyzer {
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self { taxonomy }
    }

    pub fn analyze(
        &self,
        profile: &CandidateProfile,
        job: &JobRequirements,
        options: GapOptions,
    ) -> GapAnalysis {
        let target = job.target_proficiency();
        let mut analysis = GapAnalysis::default();
        let mut seen: HashSet<String> = HashSet::new();

        // Readiness: weighted credit per job skill; partial holdings earn current/target.
        let mut credit = 0.0;
        let mut possible = 0.0;

        let buckets = [
            (GapCategory::Critical, &job.required_skills),
            (GapCategory::Important, &job.preferred_skills),
        ];
        for (category, skills) in buckets {
            for skill in skills {
                if !seen.insert(self.taxonomy.aliases().resolve(skill)) {
                    continue;
                }
                possible += category.job_weight();

                match self.coverage(profile, skill, target) {
                    Coverage::Met => {
                        credit += category.job_weight();
                        analysis.matched_skills.push(skill.clone());
                    }
                    Coverage::Partial(current) => {
                        credit += category.job_weight() * current.rank() as f64
                            / target.rank() as f64;
                        let gap = self.build_gap(profile, skill, category, target, Some(current));
                        push_gap(&mut analysis, gap);
                    }
                    Coverage::Absent => {
                        let gap = self.build_gap(profile, skill, category, target, None);
                        push_gap(&mut analysis, gap);
                    }
                }
            }
        }

        if options.include_related {
            for gap in self.related_gaps(profile, job, &seen) {
                push_gap(&mut analysis, gap);
            }
        }

        for bucket in [
            &mut analysis.critical_gaps,
            &mut analysis.important_gaps,
            &mut analysis.nice_to_have_gaps,
        ] {
            bucket.sort_by(|a, b| {
                b.priority_score
                    .partial_cmp(&a.priority_score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        analysis.critical_gap_count = analysis.critical_gaps.len();
        analysis.important_gap_count = analysis.important_gaps.len();
        analysis.total_gaps = analysis.critical_gap_count
            + analysis.important_gap_count
            + analysis.nice_to_have_gaps.len();
        analysis.readiness_score = if possible > 0.0 {
            round1((credit / possible * 100.0).clamp(0.0, 100.0))
        } else {
            100.0
        };

        debug!(
            "Gap analysis for '{}': {} critical, {} important, {} nice-to-have, readiness {}",
            job.title,
            analysis.critical_gap_count,
            analysis.important_gap_count,
            analysis.nice_to_have_gaps.len(),
            analysis.readiness_score
        );
        analysis
    }

    fn coverage(&self, profile: &CandidateProfile, skill: &str, target: Proficiency) -> Coverage {
        match find_candidate_skill(self.taxonomy.aliases(), &profile.skills, skill) {
            None => Coverage::Absent,
            Some(held) => match held.proficiency {
                Some(level) if level < target => Coverage::Partial(level),
                // Unspecified proficiency gets the benefit of the doubt.
                _ => Coverage::Met,
            },
        }
    }

    fn build_gap(
        &self,
        profile: &CandidateProfile,
        skill: &str,
        category: GapCategory,
        target: Proficiency,
        current: Option<Proficiency>,
    ) -> SkillGap {
        let transferability = self.transferability(profile, skill);
        let levels = target.rank().saturating_sub(current.map_or(0, |c| c.rank())) as f64;
        let hours = (levels * HOURS_PER_LEVEL * (1.0 - MAX_TRANSFER_DISCOUNT * transferability))
            .max(MIN_GAP_HOURS)
            .round();

        let priority = category.weight() * 0.6 + category.job_weight() * 0.25 + levels / 4.0 * 0.15;
        let importance = category.weight() * 0.7 + category.job_weight() * 0.3;

        SkillGap {
            skill_name: skill.to_string(),
            category,
            priority_score: round3(priority.clamp(0.0, 1.0)),
            importance_score: round3(importance.clamp(0.0, 1.0)),
            estimated_learning_hours: hours,
            transferability_score: round3(transferability),
            target_level: target,
            current_level: current,
        }
    }

    /// Fraction of the skill's prerequisites and related skills the candidate
    /// already holds. Unknown skills transfer nothing.
    fn transferability(&self, profile: &CandidateProfile, skill: &str) -> f64 {
        let Some(node) = self.taxonomy.resolve_node(skill) else {
            return 0.0;
        };

        let neighbours: HashSet<&str> = node
            .prerequisites
            .iter()
            .chain(&node.related_skills)
            .map(String::as_str)
            .collect();
        if neighbours.is_empty() {
            return 0.0;
        }

        let held = neighbours
            .iter()
            .filter_map(|id| self.taxonomy.lookup(id))
            .filter(|n| {
                find_candidate_skill(self.taxonomy.aliases(), &profile.skills, &n.canonical_name)
                    .is_some()
            })
            .count();

        (held as f64 / neighbours.len() as f64).clamp(0.0, 1.0)
    }

    /// Up to three related skills of matched required skills that neither the
    /// candidate nor the job already lists.
    fn related_gaps(
        &self,
        profile: &CandidateProfile,
        job: &JobRequirements,
        listed: &HashSet<String>,
    ) -> Vec<SkillGap> {
        let resolver = self.taxonomy.aliases();
        let mut surfaced: HashSet<String> = HashSet::new();
        let mut gaps = Vec::new();

        let matched_required = job.required_skills.iter().filter(|s| {
            find_candidate_skill(resolver, &profile.skills, s).is_some()
        });

        for skill in matched_required {
            let Some(node) = self.taxonomy.resolve_node(skill) else {
                continue;
            };
            for related_id in &node.related_skills {
                if gaps.len() >= MAX_RELATED_GAPS {
                    return gaps;
                }
                let Some(related) = self.taxonomy.lookup(related_id) else {
                    continue;
                };
                let key = resolver.resolve(&related.canonical_name);
                if listed.contains(&key) || !surfaced.insert(key) {
                    continue;
                }
                if find_candidate_skill(resolver, &profile.skills, &related.canonical_name).is_some() {
                    continue;
                }
                gaps.push(self.build_gap(
                    profile,
                    &related.canonical_name,
                    GapCategory::NiceToHave,
                    Proficiency::Beginner,
                    None,
                ));
            }
        }

        gaps
    }
}

fn push_gap(analysis: &mut GapAnalysis, gap: SkillGap) {
    match gap.category {
        GapCategory::Critical => analysis.critical_gaps.push(gap),
        GapCategory::Important => analysis.important_gaps.push(gap),
        GapCategory::NiceToHave => analysis.nice_to_have_gaps.push(gap),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::ExperienceLevel;
    use crate::models::CandidateSkill;

    fn analyzer() -> GapAnalyzer {
        GapAnalyzer::new(Arc::new(Taxonomy::builtin().unwrap()))
    }

    fn profile(skills: &[(&str, Option<Proficiency>)]) -> CandidateProfile {
        CandidateProfile {
            skills: skills
                .iter()
                .map(|(n, p)| CandidateSkill::new(n, *p))
                .collect(),
            ..Default::default()
        }
    }

    fn job(required: &[&str], preferred: &[&str]) -> JobRequirements {
        JobRequirements {
            title: "Platform Engineer".to_string(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_required_skills_are_critical() {
        let analysis = analyzer().analyze(
            &profile(&[("Python", Some(Proficiency::Advanced))]),
            &job(&["Python", "Go", "Docker"], &[]),
            GapOptions::default(),
        );
        let names: Vec<&str> = analysis.critical_gaps.iter().map(|g| g.skill_name.as_str()).collect();
        assert_eq!(analysis.critical_gap_count, 2);
        assert!(names.contains(&"Go") && names.contains(&"Docker"), "got {names:?}");
        assert_eq!(analysis.matched_skills, vec!["Python"]);
        assert!(analysis.critical_gaps.iter().all(|g| g.current_level.is_none()));
    }

    #[test]
    fn test_missing_preferred_skills_are_important() {
        let analysis = analyzer().analyze(
            &profile(&[("Go", None)]),
            &job(&["Go"], &["Kafka", "golang"]),
            GapOptions::default(),
        );
        assert_eq!(analysis.critical_gap_count, 0);
        assert_eq!(analysis.important_gap_count, 1, "golang duplicates Go and is skipped");
        assert_eq!(analysis.important_gaps[0].skill_name, "Kafka");
        assert_eq!(analysis.important_gaps[0].category, GapCategory::Important);
    }

    #[test]
    fn test_no_gaps_means_full_readiness() {
        let analysis = analyzer().analyze(
            &profile(&[("Go", Some(Proficiency::Expert)), ("Docker", None)]),
            &job(&["Go", "Docker"], &[]),
            GapOptions::default(),
        );
        assert_eq!(analysis.total_gaps, 0);
        assert_eq!(analysis.readiness_score, 100.0);

        let empty = analyzer().analyze(&CandidateProfile::default(), &job(&[], &[]), GapOptions::default());
        assert_eq!(empty.readiness_score, 100.0);
    }

    #[test]
    fn test_readiness_drops_as_critical_gaps_rise() {
        let a = analyzer();
        let job = job(&["Go", "Docker", "Kafka", "Rust"], &[]);
        let mut last = f64::MAX;
        for held in [
            vec![("Go", None), ("Docker", None), ("Kafka", None), ("Rust", None)],
            vec![("Go", None), ("Docker", None), ("Kafka", None)],
            vec![("Go", None), ("Docker", None)],
            vec![("Go", None)],
            vec![],
        ] {
            let analysis = a.analyze(&profile(&held), &job, GapOptions::default());
            assert!(
                analysis.readiness_score < last,
                "readiness {} with {} critical gaps did not drop",
                analysis.readiness_score,
                analysis.critical_gap_count
            );
            last = analysis.readiness_score;
        }
    }

    #[test]
    fn test_sub_threshold_skill_is_partial_gap() {
        let mut senior = job(&["Python"], &[]);
        senior.experience_level = Some(ExperienceLevel::Senior);
        let analysis = analyzer().analyze(
            &profile(&[("Python", Some(Proficiency::Beginner))]),
            &senior,
            GapOptions::default(),
        );
        let gap = &analysis.critical_gaps[0];
        assert_eq!(gap.current_level, Some(Proficiency::Beginner));
        assert_eq!(gap.target_level, Proficiency::Advanced);
        assert!(analysis.readiness_score > 0.0 && analysis.readiness_score < 100.0);
    }

    #[test]
    fn test_larger_level_gap_needs_more_hours() {
        let mut senior = job(&["Rust"], &[]);
        senior.experience_level = Some(ExperienceLevel::Senior);
        let a = analyzer();

        let absent = a.analyze(&profile(&[]), &senior, GapOptions::default());
        let partial = a.analyze(
            &profile(&[("Rust", Some(Proficiency::Intermediate))]),
            &senior,
            GapOptions::default(),
        );
        assert!(
            absent.critical_gaps[0].estimated_learning_hours
                > partial.critical_gaps[0].estimated_learning_hours
        );
    }

    #[test]
    fn test_transferable_skills_reduce_hours() {
        let a = analyzer();
        let job = job(&["Kubernetes"], &[]);
        let cold = a.analyze(&profile(&[]), &job, GapOptions::default());
        let warm = a.analyze(
            &profile(&[("Docker", None), ("Helm", None), ("Terraform", None)]),
            &job,
            GapOptions::default(),
        );
        let cold_gap = &cold.critical_gaps[0];
        let warm_gap = &warm.critical_gaps[0];
        assert_eq!(cold_gap.transferability_score, 0.0);
        assert!(warm_gap.transferability_score > 0.5);
        assert!(warm_gap.estimated_learning_hours < cold_gap.estimated_learning_hours);
    }

    #[test]
    fn test_critical_outranks_important_priority() {
        let analysis = analyzer().analyze(
            &profile(&[]),
            &job(&["Go"], &["Kafka"]),
            GapOptions::default(),
        );
        assert!(analysis.critical_gaps[0].priority_score > analysis.important_gaps[0].priority_score);
        assert!(
            analysis.critical_gaps[0].importance_score > analysis.important_gaps[0].importance_score
        );
    }

    #[test]
    fn test_related_gaps_only_when_requested() {
        let a = analyzer();
        let p = profile(&[("Go", Some(Proficiency::Expert))]);
        let j = job(&["Go"], &[]);

        let plain = a.analyze(&p, &j, GapOptions::default());
        assert!(plain.nice_to_have_gaps.is_empty());

        let related = a.analyze(&p, &j, GapOptions { include_related: true });
        assert!(!related.nice_to_have_gaps.is_empty());
        assert!(related.nice_to_have_gaps.len() <= MAX_RELATED_GAPS);
        assert!(related
            .nice_to_have_gaps
            .iter()
            .all(|g| g.category == GapCategory::NiceToHave && g.skill_name != "Go"));
        assert_eq!(related.readiness_score, 100.0, "related gaps do not affect readiness");
    }
}
