use serde::{Deserialize, Serialize};

/// Self-reported skill proficiency, ordered beginner → expert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    /// Match weight used by skill scoring. Unspecified proficiency weighs 0.7.
    pub fn weight(level: Option<Proficiency>) -> f64 {
        match level {
            Some(Proficiency::Beginner) => 0.5,
            Some(Proficiency::Intermediate) => 0.75,
            Some(Proficiency::Advanced) => 0.9,
            Some(Proficiency::Expert) => 1.0,
            None => 0.7,
        }
    }

    /// 1 (beginner) through 4 (expert).
    pub fn rank(&self) -> u8 {
        match self {
            Proficiency::Beginner => 1,
            Proficiency::Intermediate => 2,
            Proficiency::Advanced => 3,
            Proficiency::Expert => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "beginner",
            Proficiency::Intermediate => "intermediate",
            Proficiency::Advanced => "advanced",
            Proficiency::Expert => "expert",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CandidateSkill {
    pub name: String,
    #[serde(default)]
    pub proficiency: Option<Proficiency>,
    #[serde(default)]
    pub years: Option<f64>,
}

impl CandidateSkill {
    pub fn new(name: &str, proficiency: Option<Proficiency>) -> Self {
        Self {
            name: name.to_string(),
            proficiency,
            years: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkHistory {
    pub title: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub duration_months: u32,
}

/// Degree levels. Anything unrecognised deserializes as `Other` (rank 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeLevel {
    HighSchool,
    #[serde(alias = "associates")]
    Associate,
    #[serde(alias = "bachelors")]
    Bachelor,
    #[serde(alias = "masters")]
    Master,
    #[serde(alias = "phd")]
    Doctorate,
    #[serde(other)]
    Other,
}

impl DegreeLevel {
    pub fn rank(&self) -> u8 {
        match self {
            DegreeLevel::Other => 0,
            DegreeLevel::HighSchool => 1,
            DegreeLevel::Associate => 2,
            DegreeLevel::Bachelor => 3,
            DegreeLevel::Master => 4,
            DegreeLevel::Doctorate => 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Education {
    pub degree: DegreeLevel,
    #[serde(default)]
    pub field: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Location {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemotePreference {
    Remote,
    Hybrid,
    #[serde(alias = "on_site", alias = "office")]
    Onsite,
    Any,
    /// Unrecognised preference; treated like no preference.
    #[serde(other)]
    Other,
}

/// A candidate's professional profile. Supplied per request, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<CandidateSkill>,
    #[serde(default)]
    pub total_years_experience: Option<f64>,
    #[serde(default)]
    pub work_history: Vec<WorkHistory>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub willing_to_relocate: bool,
    #[serde(default)]
    pub remote_preference: Option<RemotePreference>,
}

impl CandidateProfile {
    /// Explicit years of experience, or the work history's summed months / 12.
    pub fn effective_years(&self) -> f64 {
        match self.total_years_experience {
            Some(years) => years.max(0.0),
            None => {
                let months: u64 = self
                    .work_history
                    .iter()
                    .map(|w| u64::from(w.duration_months))
                    .sum();
                months as f64 / 12.0
            }
        }
    }

    /// Highest-ranked degree on the profile, if any education is listed.
    pub fn highest_degree(&self) -> Option<DegreeLevel> {
        self.education
            .iter()
            .map(|e| e.degree)
            .max_by_key(|d| d.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_years_prefers_explicit_value() {
        let profile = CandidateProfile {
            total_years_experience: Some(4.0),
            work_history: vec![WorkHistory {
                title: "Engineer".to_string(),
                industry: None,
                duration_months: 120,
            }],
            ..Default::default()
        };
        assert_eq!(profile.effective_years(), 4.0);
    }

    #[test]
    fn test_effective_years_inferred_from_history() {
        let profile = CandidateProfile {
            work_history: vec![
                WorkHistory {
                    title: "Engineer".to_string(),
                    industry: None,
                    duration_months: 18,
                },
                WorkHistory {
                    title: "Analyst".to_string(),
                    industry: None,
                    duration_months: 6,
                },
            ],
            ..Default::default()
        };
        assert!((profile.effective_years() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_effective_years_sums_long_histories_without_overflow() {
        let entry = WorkHistory {
            title: "Engineer".to_string(),
            industry: None,
            duration_months: u32::MAX,
        };
        let profile = CandidateProfile {
            work_history: vec![entry.clone(), entry],
            ..Default::default()
        };
        let expected = 2.0 * u32::MAX as f64 / 12.0;
        assert!((profile.effective_years() - expected).abs() < 1.0);
    }

    #[test]
    fn test_unknown_remote_preference_deserializes_as_other() {
        let pref: RemotePreference = serde_json::from_str(r#""flexible""#).unwrap();
        assert_eq!(pref, RemotePreference::Other);
    }

    #[test]
    fn test_unknown_degree_deserializes_as_other() {
        let degree: DegreeLevel = serde_json::from_str(r#""bootcamp""#).unwrap();
        assert_eq!(degree, DegreeLevel::Other);
        assert_eq!(degree.rank(), 0);
    }

    #[test]
    fn test_profile_rejects_unknown_fields() {
        let json = r#"{"skills": [], "favouriteColour": "teal"}"#;
        assert!(serde_json::from_str::<CandidateProfile>(json).is_err());
    }

    #[test]
    fn test_profile_deserializes_camel_case() {
        let json = r#"{
            "skills": [{"name": "Go", "proficiency": "expert"}],
            "totalYearsExperience": 5,
            "remotePreference": "on_site",
            "education": [{"degree": "masters", "field": "Computer Science"}]
        }"#;
        let profile: CandidateProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.skills[0].proficiency, Some(Proficiency::Expert));
        assert_eq!(profile.remote_preference, Some(RemotePreference::Onsite));
        assert_eq!(profile.highest_degree(), Some(DegreeLevel::Master));
    }
}
