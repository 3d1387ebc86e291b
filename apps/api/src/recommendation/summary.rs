use serde::Serialize;

use crate::recommendation::phases::LearningPhase;

const TOP_SKILLS: usize = 3;
const QUICK_WIN_HOURS: f64 = 20.0;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub headline: String,
    pub total_skills: usize,
    pub free_resources: usize,
    pub paid_resources: usize,
    pub estimated_cost: f64,
    pub top_skills: Vec<String>,
    pub quick_wins: Vec<String>,
}

/// Summarises a plan. Only primary resources count towards cost and the
/// free/paid split; alternatives are optional.
pub fn build_summary(phases: &[LearningPhase], critical_gaps: usize, total_weeks: usize) -> PlanSummary {
    let skills: Vec<_> = phases.iter().flat_map(|p| &p.skills).collect();

    let mut free_resources = 0;
    let mut paid_resources = 0;
    let mut estimated_cost = 0.0;
    for resource in skills.iter().filter_map(|s| s.primary_resource.as_ref()) {
        if resource.resource.cost_type.is_free() {
            free_resources += 1;
        } else {
            paid_resources += 1;
            estimated_cost += resource.resource.effective_cost();
        }
    }

    let top_skills = skills
        .iter()
        .take(TOP_SKILLS)
        .map(|s| s.skill_name.clone())
        .collect();
    let quick_wins = skills
        .iter()
        .filter(|s| s.estimated_hours <= QUICK_WIN_HOURS)
        .map(|s| s.skill_name.clone())
        .collect();

    PlanSummary {
        headline: build_headline(skills.len(), critical_gaps, total_weeks),
        total_skills: skills.len(),
        free_resources,
        paid_resources,
        estimated_cost: (estimated_cost * 100.0).round() / 100.0,
        top_skills,
        quick_wins,
    }
}

fn build_headline(total_skills: usize, critical_gaps: usize, total_weeks: usize) -> String {
    if total_skills == 0 {
        return "You already meet every skill requirement for this role. Time to apply!".to_string();
    }

    let weeks = if total_weeks == 1 {
        "about 1 week".to_string()
    } else {
        format!("about {total_weeks} weeks")
    };
    match critical_gaps {
        0 => format!("No critical gaps. {total_skills} skill(s) to polish in {weeks}."),
        1 => format!("1 critical skill gap to close. Job-ready in {weeks}."),
        n => format!("{n} critical skill gaps to close. Job-ready in {weeks}."),
    }
}
