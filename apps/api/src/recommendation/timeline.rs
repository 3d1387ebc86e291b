//! Week-by-week schedule synthesis.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::gaps::GapCategory;
use crate::recommendation::engine::SkillRecommendation;
use crate::recommendation::phases::LearningPhase;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    pub week_number: usize,
    pub phase_number: usize,
    pub skill_focus: String,
    pub resource_title: String,
    pub hours_planned: f64,
    pub cumulative_hours: f64,
    pub activities: Vec<String>,
    pub is_checkpoint: bool,
    pub checkpoint_description: Option<String>,
}

/// Flattens phases into consecutive weeks.
///
/// Each skill's hours are spread over `ceil(hours / weekly_hours)` weeks, the
/// last one carrying the remainder. A critical skill's last week is a
/// checkpoint. A phase with several skills ends with a half-week review.
pub fn build_timeline(phases: &[LearningPhase], weekly_hours: f64) -> Vec<WeeklySchedule> {
    let mut weeks: Vec<WeeklySchedule> = Vec::new();
    let mut cumulative = 0.0;

    for phase in phases {
        for skill in &phase.skills {
            let hours = skill.estimated_hours.max(0.0);
            let span = ((hours / weekly_hours).ceil() as usize).max(1);
            let mut remaining = hours;

            for offset in 0..span {
                // Unrounded so the weeks always add back up to the skill's hours.
                let planned = remaining.min(weekly_hours);
                remaining -= planned;
                cumulative += planned;

                let is_last = offset + 1 == span;
                let checkpoint = is_last && skill.category == GapCategory::Critical;
                weeks.push(WeeklySchedule {
                    week_number: weeks.len() + 1,
                    phase_number: phase.phase_number,
                    skill_focus: skill.skill_name.clone(),
                    resource_title: skill.resource_title().to_string(),
                    hours_planned: round1(planned),
                    cumulative_hours: round1(cumulative),
                    activities: skill_activities(skill, offset, span),
                    is_checkpoint: checkpoint,
                    checkpoint_description: checkpoint.then(|| {
                        format!(
                            "Verify {} at {} level with a small project or practice assessment",
                            skill.skill_name,
                            skill.target_level.as_str()
                        )
                    }),
                });
            }
        }

        if phase.skills.len() > 1 {
            let planned = weekly_hours * 0.5;
            cumulative += planned;
            weeks.push(WeeklySchedule {
                week_number: weeks.len() + 1,
                phase_number: phase.phase_number,
                skill_focus: format!("{} review", phase.name),
                resource_title: String::new(),
                hours_planned: round1(planned),
                cumulative_hours: round1(cumulative),
                activities: vec![
                    "Review notes and revisit weak spots".to_string(),
                    "Combine this phase's skills in one small project".to_string(),
                ],
                is_checkpoint: true,
                checkpoint_description: Some(format!(
                    "Phase {} complete: {}",
                    phase.phase_number, phase.milestone
                )),
            });
        }
    }

    weeks
}

fn skill_activities(skill: &SkillRecommendation, offset: usize, span: usize) -> Vec<String> {
    let resource = skill.resource_title();
    let mut activities = Vec::new();

    if offset == 0 {
        activities.push(format!("Start {resource}"));
        activities.push(format!("Set up a practice environment for {}", skill.skill_name));
    } else {
        activities.push(format!("Continue {resource}"));
    }

    if offset + 1 == span {
        activities.push(format!("Finish {resource}"));
        activities.push(format!("Apply {} in a small exercise", skill.skill_name));
    } else {
        activities.push("Complete the week's exercises".to_string());
    }

    activities
}

/// Target date when given, else `today` plus one calendar week per scheduled week.
pub fn completion_date(target: Option<NaiveDate>, today: NaiveDate, weeks: usize) -> NaiveDate {
    target.unwrap_or_else(|| today + Duration::days(7 * weeks as i64))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Proficiency;
    use crate::recommendation::phases::build_phases;

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

    fn sample_phases() -> Vec<LearningPhase> {
        build_phases(
            vec![
                rec("Go", GapCategory::Critical, 25.0),
                rec("Docker", GapCategory::Critical, 4.0),
                rec("Kafka", GapCategory::Important, 12.0),
            ],
            10.0,
        )
    }

    #[test]
    fn test_weeks_sequential_and_cumulative_monotone() {
        let timeline = build_timeline(&sample_phases(), 10.0);
        assert!(!timeline.is_empty());
        for (i, week) in timeline.iter().enumerate() {
            assert_eq!(week.week_number, i + 1);
        }
        for pair in timeline.windows(2) {
            assert!(pair[1].cumulative_hours >= pair[0].cumulative_hours);
        }
    }

    #[test]
    fn test_skill_spread_over_ceiling_weeks() {
        let timeline = build_timeline(&sample_phases(), 10.0);
        let go: Vec<&WeeklySchedule> = timeline.iter().filter(|w| w.skill_focus == "Go").collect();
        assert_eq!(go.len(), 3);
        assert_eq!(go[0].hours_planned, 10.0);
        assert_eq!(go[2].hours_planned, 5.0, "last week carries the remainder");
    }

    #[test]
    fn test_critical_skill_last_week_is_checkpoint() {
        let timeline = build_timeline(&sample_phases(), 10.0);
        let go: Vec<&WeeklySchedule> = timeline.iter().filter(|w| w.skill_focus == "Go").collect();
        assert!(!go[0].is_checkpoint);
        assert!(go[2].is_checkpoint);
        assert!(go[2].checkpoint_description.as_deref().unwrap().contains("Go"));

        assert!(
            timeline.iter().filter(|w| w.skill_focus == "Kafka").all(|w| !w.is_checkpoint),
            "important skills are not checkpoints"
        );
    }

    #[test]
    fn test_multi_skill_phase_gets_review_week() {
        let timeline = build_timeline(&sample_phases(), 10.0);
        let reviews: Vec<&WeeklySchedule> = timeline
            .iter()
            .filter(|w| w.skill_focus.ends_with("review"))
            .collect();
        assert_eq!(reviews.len(), 1, "only the two-skill critical phase is reviewed");
        assert_eq!(reviews[0].phase_number, 1);
        assert_eq!(reviews[0].hours_planned, 5.0);
        assert!(reviews[0].is_checkpoint);
    }

    #[test]
    fn test_total_hours_match_phase_hours() {
        let phases = sample_phases();
        let timeline = build_timeline(&phases, 10.0);
        let last = timeline.last().unwrap();
        assert_eq!(last.cumulative_hours, 25.0 + 4.0 + 12.0 + 5.0);
    }

    #[test]
    fn test_fractional_weekly_budget_keeps_every_hour() {
        let phases = sample_phases();
        let timeline = build_timeline(&phases, 2.25);
        assert!(timeline.iter().all(|w| w.hours_planned > 0.0));

        let skill_hours: f64 = phases.iter().map(|p| p.total_hours).sum();
        let review_hours = 2.25 * 0.5;
        let last = timeline.last().unwrap();
        assert!(
            (last.cumulative_hours - (skill_hours + review_hours)).abs() < 0.05,
            "got {}",
            last.cumulative_hours
        );

        let go: Vec<&WeeklySchedule> = timeline.iter().filter(|w| w.skill_focus == "Go").collect();
        assert_eq!(go.len(), 12);
        assert!(go[11].is_checkpoint);
        assert!(go[11].hours_planned > 0.0, "checkpoint week carries the remainder");
    }

    #[test]
    fn test_completion_date() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(
            completion_date(None, today, 4),
            NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
        );
        let target = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(completion_date(Some(target), today, 4), target);
    }
}
