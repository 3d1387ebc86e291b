use serde::{Deserialize, Serialize};

use super::profile::{DegreeLevel, Proficiency};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[serde(alias = "intern")]
    Internship,
    #[serde(alias = "junior", alias = "entry_level")]
    Entry,
    #[serde(alias = "mid_level", alias = "intermediate")]
    Mid,
    Senior,
    #[serde(alias = "principal", alias = "staff")]
    Lead,
    Executive,
    #[serde(other)]
    Other,
}

impl ExperienceLevel {
    /// Midpoint years used when a job gives no explicit minimum. `None` for
    /// unrecognised levels.
    pub fn midpoint_years(&self) -> Option<f64> {
        match self {
            ExperienceLevel::Internship => Some(0.0),
            ExperienceLevel::Entry => Some(1.0),
            ExperienceLevel::Mid => Some(3.0),
            ExperienceLevel::Senior => Some(6.0),
            ExperienceLevel::Lead => Some(8.0),
            ExperienceLevel::Executive => Some(12.0),
            ExperienceLevel::Other => None,
        }
    }

    /// Proficiency a candidate is expected to reach for a skill at this level.
    pub fn target_proficiency(&self) -> Proficiency {
        match self {
            ExperienceLevel::Internship | ExperienceLevel::Entry => Proficiency::Beginner,
            ExperienceLevel::Mid | ExperienceLevel::Other => Proficiency::Intermediate,
            ExperienceLevel::Senior | ExperienceLevel::Lead => Proficiency::Advanced,
            ExperienceLevel::Executive => Proficiency::Expert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Remote,
    Hybrid,
    #[serde(alias = "on_site", alias = "office")]
    Onsite,
    /// Any other arrangement; scored on geography like on-site work.
    #[serde(other)]
    Other,
}

/// What a job asks for. Every field is optional on the wire; absent data
/// produces neutral component scores rather than errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobRequirements {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub min_years_experience: Option<f64>,
    #[serde(default)]
    pub max_years_experience: Option<f64>,
    #[serde(default)]
    pub required_degree: Option<DegreeLevel>,
    #[serde(default)]
    pub preferred_fields: Vec<String>,
    #[serde(default)]
    pub location_type: Option<LocationType>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub related_industries: Vec<String>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
}

impl JobRequirements {
    /// Target proficiency for this job's skills; intermediate when no level is given.
    pub fn target_proficiency(&self) -> Proficiency {
        self.experience_level
            .map(|l| l.target_proficiency())
            .unwrap_or(Proficiency::Intermediate)
    }
}
