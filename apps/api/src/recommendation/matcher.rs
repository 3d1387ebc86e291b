//! Resource matcher: finds catalog entries for a skill, applies the learner's
//! filters and ranks what is left by relevance.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Proficiency;
use crate::recommendation::catalog::{Difficulty, ResourceCatalog, ResourceEntry, ResourceType};
use crate::taxonomy::AliasResolver;

pub const DEFAULT_WEEKLY_HOURS: f64 = 10.0;
/// Smaller positive budgets are raised to this so a plan stays a bounded
/// number of weeks.
pub const MIN_WEEKLY_HOURS: f64 = 1.0;

// ────────────────────────────────────────────────────────────────────────────
// Preferences
// ────────────────────────────────────────────────────────────────────────────

/// Learner preferences. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LearningPreferences {
    #[serde(default)]
    pub weekly_hours_available: Option<f64>,
    #[serde(default, alias = "free")]
    pub free_only: bool,
    #[serde(default)]
    pub max_budget: Option<f64>,
    #[serde(default)]
    pub excluded_providers: Vec<String>,
    /// Allow-list; empty means every type is acceptable.
    #[serde(default)]
    pub resource_types: Vec<ResourceType>,
    #[serde(default)]
    pub prefer_hands_on: bool,
    #[serde(default)]
    pub prefer_certificate: bool,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub include_related_skills: bool,
}

impl LearningPreferences {
    /// Weekly study hours; 10 when unset or not positive, at least 1 otherwise.
    pub fn weekly_hours(&self) -> f64 {
        self.weekly_hours_available
            .filter(|h| h.is_finite() && *h > 0.0)
            .map(|h| h.max(MIN_WEEKLY_HOURS))
            .unwrap_or(DEFAULT_WEEKLY_HOURS)
    }

    pub fn allows(&self, entry: &ResourceEntry) -> bool {
        if self.free_only && !entry.cost_type.is_free() {
            return false;
        }
        if let Some(budget) = self.max_budget {
            if entry.effective_cost() > budget {
                return false;
            }
        }
        if self
            .excluded_providers
            .iter()
            .any(|p| p.trim().eq_ignore_ascii_case(entry.provider.trim()))
        {
            return false;
        }
        self.resource_types.is_empty() || self.resource_types.contains(&entry.resource_type)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Relevance scoring
// ────────────────────────────────────────────────────────────────────────────

/// Relevance weights. Must sum to 1.0.
#[derive(Debug, Clone)]
pub struct RelevanceWeights {
    pub skill_match: f64,
    pub difficulty_fit: f64,
    pub quality: f64,
    pub preference: f64,
    pub popularity: f64,
}

impl Default for RelevanceWeights {
    fn default() -> Self {
        Self {
            skill_match: 0.30,
            difficulty_fit: 0.20,
            quality: 0.20,
            preference: 0.20,
            popularity: 0.10,
        }
    }
}

/// A catalog entry ranked for one skill.
#[derive(Debug, Clone)]
pub struct RankedResource<'a> {
    pub entry: &'a ResourceEntry,
    pub relevance: f64,
    /// The resource's primary skill is the skill being learned.
    pub primary_match: bool,
}

/// What the learner is trying to move between for one skill.
#[derive(Debug, Clone, Copy)]
pub struct LevelRange {
    pub current: Option<Proficiency>,
    pub target: Proficiency,
}

pub struct ResourceMatcher<'a> {
    catalog: &'a ResourceCatalog,
    resolver: &'a AliasResolver,
    weights: RelevanceWeights,
}

impl<'a> ResourceMatcher<'a> {
    pub fn new(catalog: &'a ResourceCatalog, resolver: &'a AliasResolver) -> Self {
        Self {
            catalog,
            resolver,
            weights: RelevanceWeights::default(),
        }
    }

    /// Entries whose primary skill or skill list covers `skill`, before filtering.
    pub fn matching(&self, skill: &str) -> Vec<&'a ResourceEntry> {
        self.catalog
            .entries()
            .iter()
            .filter(|e| {
                self.resolver.covers(&e.primary_skill, skill)
                    || e.skills_covered.iter().any(|s| self.resolver.covers(s, skill))
            })
            .collect()
    }

    /// Matching entries that pass the learner's filters, most relevant first.
    /// Ties fall back to rating count, then id, so the order is stable.
    pub fn rank(
        &self,
        skill: &str,
        levels: LevelRange,
        prefs: &LearningPreferences,
    ) -> Vec<RankedResource<'a>> {
        let wanted = self.resolver.resolve(skill);

        let mut ranked: Vec<RankedResource<'a>> = self
            .matching(skill)
            .into_iter()
            .filter(|e| prefs.allows(e))
            .map(|entry| {
                let primary_match = self.resolver.resolve(&entry.primary_skill) == wanted;
                RankedResource {
                    entry,
                    relevance: self.relevance(entry, primary_match, levels, prefs),
                    primary_match,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.entry.rating_count.cmp(&a.entry.rating_count))
                .then_with(|| a.entry.id.cmp(&b.entry.id))
        });
        ranked
    }

    fn relevance(
        &self,
        entry: &ResourceEntry,
        primary_match: bool,
        levels: LevelRange,
        prefs: &LearningPreferences,
    ) -> f64 {
        let w = &self.weights;
        let skill = if primary_match { 1.0 } else { 0.5 };
        let score = skill * w.skill_match
            + difficulty_fit(entry.difficulty, levels) * w.difficulty_fit
            + quality(entry) * w.quality
            + preference_alignment(entry, prefs) * w.preference
            + popularity(entry.rating_count) * w.popularity;
        (score.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
    }
}

/// How well a resource's difficulty sits between the learner's current and
/// target level. An unknown current level is taken as one below the target.
pub fn difficulty_fit(difficulty: Difficulty, levels: LevelRange) -> f64 {
    if difficulty == Difficulty::AllLevels {
        return 0.9;
    }

    let target = levels.target.rank() as i32;
    let current = levels
        .current
        .map(|c| c.rank() as i32)
        .unwrap_or(target - 1);
    let (low, high) = (current.min(target), current.max(target));
    let rank = difficulty.rank() as i32;

    if (low..=high).contains(&rank) {
        1.0
    } else if rank == low - 1 || rank == high + 1 {
        0.7
    } else {
        0.4
    }
}

fn quality(entry: &ResourceEntry) -> f64 {
    let base = (entry.rating / 5.0).clamp(0.0, 1.0);
    let bonus = if entry.verified { 0.1 } else { 0.0 };
    (base + bonus).min(1.0)
}

fn preference_alignment(entry: &ResourceEntry, prefs: &LearningPreferences) -> f64 {
    let mut score: f64 = 0.5;
    if prefs.free_only && entry.cost_type.is_free() {
        score += 0.3;
    }
    if prefs.prefer_hands_on && entry.hands_on {
        score += 0.1;
    }
    if prefs.prefer_certificate && entry.has_certificate {
        score += 0.1;
    }
    score.min(1.0)
}

fn popularity(rating_count: u64) -> f64 {
    if rating_count == 0 {
        return 0.0;
    }
    ((rating_count as f64).log10() / 7.0).clamp(0.0, 1.0)
}
