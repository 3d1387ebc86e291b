use serde::Serialize;

use crate::gaps::GapCategory;
use crate::recommendation::engine::SkillRecommendation;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPhase {
    pub phase_number: usize,
    pub name: String,
    pub description: String,
    pub skills: Vec<SkillRecommendation>,
    pub total_hours: f64,
    pub estimated_weeks: f64,
    pub milestone: String,
}

const PHASE_ORDER: [GapCategory; 3] = [
    GapCategory::Critical,
    GapCategory::Important,
    GapCategory::NiceToHave,
];

fn phase_name(category: GapCategory) -> &'static str {
    match category {
        GapCategory::Critical => "Critical Skills",
        GapCategory::Important => "Preferred Skills",
        GapCategory::NiceToHave => "Nice-to-Have Skills",
    }
}

fn phase_description(category: GapCategory) -> &'static str {
    match category {
        GapCategory::Critical => "Required skills the role cannot do without. Start here.",
        GapCategory::Important => "Preferred skills that make your application stand out.",
        GapCategory::NiceToHave => "Adjacent skills that round out your profile for the role.",
    }
}

/// Groups skill recommendations into ordered phases, one per non-empty gap
/// category. Phases are numbered from 1 in the order they appear.
pub fn build_phases(recommendations: Vec<SkillRecommendation>, weekly_hours: f64) -> Vec<LearningPhase> {
    let mut phases = Vec::new();
    let mut remaining = recommendations;

    for category in PHASE_ORDER {
        let (skills, rest): (Vec<_>, Vec<_>) =
            remaining.into_iter().partition(|s| s.category == category);
        remaining = rest;
        if skills.is_empty() {
            continue;
        }

        let total_hours = round1(skills.iter().map(|s| s.estimated_hours).sum());
        let milestone = build_milestone(category, &skills);
        phases.push(LearningPhase {
            phase_number: phases.len() + 1,
            name: phase_name(category).to_string(),
            description: phase_description(category).to_string(),
            skills,
            total_hours,
            estimated_weeks: round1(total_hours / weekly_hours),
            milestone,
        });
    }

    phases
}

fn build_milestone(category: GapCategory, skills: &[SkillRecommendation]) -> String {
    let names: Vec<&str> = skills.iter().map(|s| s.skill_name.as_str()).collect();
    let listed = names.join(", ");

    match category {
        GapCategory::Critical => {
            format!("Meet the core requirements: build a working project using {listed}")
        }
        GapCategory::Important => format!("Strengthen your application with {listed}"),
        GapCategory::NiceToHave => format!("Explore {listed} to broaden your profile"),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Proficiency;

    fn rec(name: &str, category: GapCategory, hours: f64) -> SkillRecommendation {
        SkillRecommendation {
            skill_name: name.to_string(),
            category,
            priority_score: 0.5,
            current_level: None,
            target_level: Proficiency::Intermediate,
            primary_resource: None,
            alternatives: Vec::new(),
            estimated_hours: hours,
        }
    }

    #[test]
    fn test_phases_follow_category_order() {
        let phases = build_phases(
            vec![
                rec("Kafka", GapCategory::Important, 12.0),
                rec("Go", GapCategory::Critical, 30.0),
                rec("Helm", GapCategory::NiceToHave, 4.0),
                rec("Docker", GapCategory::Critical, 10.0),
            ],
            10.0,
        );
        let names: Vec<&str> = phases.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Critical Skills", "Preferred Skills", "Nice-to-Have Skills"]);
        assert_eq!(phases[0].total_hours, 40.0);
        assert_eq!(phases[0].estimated_weeks, 4.0);
        assert_eq!(phases[0].skills[0].skill_name, "Go", "order within a phase is kept");
    }

    #[test]
    fn test_empty_categories_are_skipped() {
        let phases = build_phases(vec![rec("Kafka", GapCategory::Important, 12.0)], 4.0);
        assert_eq!(phases.len(), 1);
        assert_eq!(phases[0].phase_number, 1);
        assert_eq!(phases[0].name, "Preferred Skills");
        assert_eq!(phases[0].estimated_weeks, 3.0);
        assert!(phases[0].milestone.contains("Kafka"));
    }

    #[test]
    fn test_no_recommendations_no_phases() {
        assert!(build_phases(Vec::new(), 10.0).is_empty());
    }
}
