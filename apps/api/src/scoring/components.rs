//! Independent component scorers. Each returns a value in [0, 1] and falls back
//! to a documented neutral value when the inputs carry no signal.

use std::collections::HashSet;

use crate::models::{
    CandidateProfile, CandidateSkill, JobRequirements, LocationType, Proficiency,
    RemotePreference,
};
use crate::taxonomy::AliasResolver;

const REQUIRED_SHARE: f64 = 0.80;
const PREFERRED_SHARE: f64 = 0.20;

const YEARS_SHARE: f64 = 0.70;
const TITLE_SHARE: f64 = 0.30;
const MIN_YEARS_RATIO: f64 = 0.1;
const OVERQUALIFIED_FACTOR: f64 = 0.8;
const DEFAULT_TITLE_SIMILARITY: f64 = 0.5;

const TITLE_FILLER_WORDS: &[&str] = &[
    "senior", "sr", "junior", "jr", "lead", "principal", "staff", "i", "ii", "iii", "iv", "the",
    "of", "and", "a", "an", "to", "for", "in",
];

/// Result of comparing a candidate's skills against a job's skill lists.
#[derive(Debug, Clone, Default)]
pub struct SkillMatch {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub matched_preferred: Vec<String>,
}

/// Finds the candidate skill that satisfies `wanted`: an exact (case-insensitive)
/// name first, otherwise any alias/prefix-equivalent skill. When several
/// qualify, the highest proficiency weight wins.
pub fn find_candidate_skill<'a>(
    resolver: &AliasResolver,
    skills: &'a [CandidateSkill],
    wanted: &str,
) -> Option<&'a CandidateSkill> {
    let key = wanted.trim().to_lowercase();
    strongest(skills.iter().filter(|s| s.name.trim().to_lowercase() == key))
        .or_else(|| strongest(skills.iter().filter(|s| resolver.equivalent(&s.name, wanted))))
}

fn strongest<'a>(skills: impl Iterator<Item = &'a CandidateSkill>) -> Option<&'a CandidateSkill> {
    skills.max_by(|a, b| {
        Proficiency::weight(a.proficiency)
            .partial_cmp(&Proficiency::weight(b.proficiency))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

/// Weighted skill coverage: `required * 0.80 + preferred_ratio * 0.20`.
///
/// No required skills scores 1.0. With no preferred skills the score is the
/// required coverage alone.
pub fn score_skill_match(
    resolver: &AliasResolver,
    profile: &CandidateProfile,
    job: &JobRequirements,
) -> SkillMatch {
    let mut result = SkillMatch::default();

    let mut weighted = 0.0;
    for required in &job.required_skills {
        match find_candidate_skill(resolver, &profile.skills, required) {
            Some(held) => {
                weighted += Proficiency::weight(held.proficiency);
                result.matched.push(required.clone());
            }
            None => result.missing.push(required.clone()),
        }
    }

    for preferred in &job.preferred_skills {
        if find_candidate_skill(resolver, &profile.skills, preferred).is_some() {
            result.matched_preferred.push(preferred.clone());
        }
    }

    if job.required_skills.is_empty() {
        result.score = 1.0;
        return result;
    }

    let required_score = weighted / job.required_skills.len() as f64;
    let score = if job.preferred_skills.is_empty() {
        required_score
    } else {
        let preferred_bonus =
            result.matched_preferred.len() as f64 / job.preferred_skills.len() as f64;
        required_score * REQUIRED_SHARE + preferred_bonus * PREFERRED_SHARE
    };

    result.score = score.clamp(0.0, 1.0);
    result
}

/// Years-vs-target ratio blended with past-title similarity (`0.70 / 0.30`).
pub fn score_experience_match(profile: &CandidateProfile, job: &JobRequirements) -> f64 {
    let target_years = job
        .min_years_experience
        .or_else(|| job.experience_level.and_then(|l| l.midpoint_years()))
        .unwrap_or(0.0)
        .max(0.0);
    let candidate_years = profile.effective_years();

    let years_score = if candidate_years >= target_years {
        match job.max_years_experience {
            Some(max) if max > 0.0 && candidate_years > 2.0 * max => OVERQUALIFIED_FACTOR,
            _ => 1.0,
        }
    } else {
        (candidate_years / target_years).max(MIN_YEARS_RATIO)
    };

    let title_score = best_title_similarity(profile, &job.title);

    (years_score * YEARS_SHARE + title_score * TITLE_SHARE).clamp(0.0, 1.0)
}

/// Best Jaccard word overlap between the job title and any past title, ignoring
/// seniority and filler words. 0.5 when either side has nothing to compare.
fn best_title_similarity(profile: &CandidateProfile, job_title: &str) -> f64 {
    let target = title_words(job_title);
    if target.is_empty() {
        return DEFAULT_TITLE_SIMILARITY;
    }

    profile
        .work_history
        .iter()
        .map(|w| title_words(&w.title))
        .filter(|words| !words.is_empty())
        .map(|words| jaccard(&target, &words))
        .fold(None, |best: Option<f64>, s| Some(best.map_or(s, |b| b.max(s))))
        .unwrap_or(DEFAULT_TITLE_SIMILARITY)
}

fn title_words(title: &str) -> HashSet<String> {
    title
        .split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(|w| !w.is_empty() && !TITLE_FILLER_WORDS.contains(&w.as_str()))
        .collect()
}

fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Degree level against the requirement, plus up to 0.2 for a preferred field.
pub fn score_education_match(profile: &CandidateProfile, job: &JobRequirements) -> f64 {
    let Some(required) = job.required_degree else {
        return 1.0;
    };
    let Some(highest) = profile.highest_degree() else {
        return 0.3;
    };

    let base = match required.rank() as i16 - highest.rank() as i16 {
        d if d <= 0 => 1.0,
        1 => 0.6,
        _ => 0.2,
    };

    (base + field_bonus(profile, &job.preferred_fields)).min(1.0)
}

fn field_bonus(profile: &CandidateProfile, preferred_fields: &[String]) -> f64 {
    let mut best: f64 = 0.0;
    for field in profile.education.iter().filter_map(|e| e.field.as_deref()) {
        let field = field.trim().to_lowercase();
        if field.is_empty() {
            continue;
        }
        for wanted in preferred_fields {
            let wanted = wanted.trim().to_lowercase();
            if wanted.is_empty() {
                continue;
            }
            if field == wanted {
                best = best.max(0.2);
            } else if field.contains(&wanted) || wanted.contains(&field) {
                best = best.max(0.1);
            }
        }
    }
    best
}

/// Work-arrangement and geography fit.
pub fn score_location_fit(profile: &CandidateProfile, job: &JobRequirements) -> f64 {
    let preference = profile.remote_preference;
    match job.location_type {
        Some(LocationType::Remote) => match preference {
            None
            | Some(RemotePreference::Remote)
            | Some(RemotePreference::Any)
            | Some(RemotePreference::Other) => 1.0,
            _ => 0.7,
        },
        Some(LocationType::Hybrid) => match preference {
            None
            | Some(RemotePreference::Hybrid)
            | Some(RemotePreference::Any)
            | Some(RemotePreference::Other) => 1.0,
            Some(RemotePreference::Onsite) => 0.8,
            Some(RemotePreference::Remote) => 0.6,
        },
        Some(LocationType::Onsite) | Some(LocationType::Other) | None => {
            score_geography(profile, job)
        }
    }
}

fn score_geography(profile: &CandidateProfile, job: &JobRequirements) -> f64 {
    let job_city = non_empty(job.city.as_deref());
    let job_country = non_empty(job.country.as_deref());
    if job_city.is_none() && job_country.is_none() {
        return 1.0;
    }

    let location = profile.location.as_ref();
    let cand_city = non_empty(location.and_then(|l| l.city.as_deref()));
    let cand_country = non_empty(location.and_then(|l| l.country.as_deref()));

    if job_city.is_some() && job_city == cand_city {
        1.0
    } else if job_country.is_some() && job_country == cand_country {
        0.8
    } else if profile.willing_to_relocate {
        0.6
    } else {
        0.2
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

/// Industry overlap between work history and the job's declared industry.
pub fn score_industry_relevance(profile: &CandidateProfile, job: &JobRequirements) -> f64 {
    let Some(industry) = non_empty(job.industry.as_deref()) else {
        return 1.0;
    };
    if profile.work_history.is_empty() {
        return 0.5;
    }

    let history: Vec<String> = profile
        .work_history
        .iter()
        .filter_map(|w| non_empty(w.industry.as_deref()))
        .collect();

    if history.iter().any(|h| *h == industry) {
        return 1.0;
    }

    let related: HashSet<String> = job
        .related_industries
        .iter()
        .filter_map(|r| non_empty(Some(r)))
        .collect();
    if history.iter().any(|h| related.contains(h)) {
        0.7
    } else {
        0.2
    }
}
