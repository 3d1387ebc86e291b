//! Skill normalization: exact → alias → Jaro-Winkler fuzzy fallback.

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use tracing::debug;

use super::{SkillDomain, SkillNode, Taxonomy};

/// Minimum Jaro-Winkler similarity accepted as a fuzzy match.
pub const FUZZY_THRESHOLD: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Alias,
    Fuzzy,
    None,
}

/// Outcome of normalizing one raw skill string. `match_type == None` means no
/// node was found; the canonical fields are then empty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeResult {
    pub input: String,
    pub canonical_id: Option<String>,
    pub canonical_name: Option<String>,
    pub domain: Option<SkillDomain>,
    pub category: Option<String>,
    pub match_type: MatchType,
    pub fuzzy_score: f64,
}

impl NormalizeResult {
    fn matched(input: &str, node: &SkillNode, match_type: MatchType, fuzzy_score: f64) -> Self {
        Self {
            input: input.to_string(),
            canonical_id: Some(node.id.clone()),
            canonical_name: Some(node.canonical_name.clone()),
            domain: Some(node.domain),
            category: Some(node.category.clone()),
            match_type,
            fuzzy_score,
        }
    }

    fn unmatched(input: &str, fuzzy_score: f64) -> Self {
        Self {
            input: input.to_string(),
            canonical_id: None,
            canonical_name: None,
            domain: None,
            category: None,
            match_type: MatchType::None,
            fuzzy_score,
        }
    }

    pub fn is_match(&self) -> bool {
        self.match_type != MatchType::None
    }
}

impl Taxonomy {
    /// Maps a raw skill string to its canonical node. Never fails: absence is
    /// reported as `MatchType::None`.
    pub fn normalize(&self, raw: &str) -> NormalizeResult {
        let key = raw.trim().to_lowercase();
        if key.is_empty() {
            return NormalizeResult::unmatched(raw, 0.0);
        }

        if let Some(&idx) = self.exact_index().get(&key) {
            return NormalizeResult::matched(raw, self.node_at(idx), MatchType::Exact, 1.0);
        }

        if let Some(&idx) = self.alias_index().get(&key) {
            return NormalizeResult::matched(raw, self.node_at(idx), MatchType::Alias, 1.0);
        }

        match self.best_fuzzy(&key) {
            Some((idx, score)) if score >= FUZZY_THRESHOLD => {
                debug!(
                    "Fuzzy match '{}' -> '{}' ({score:.3})",
                    raw,
                    self.node_at(idx).canonical_name
                );
                NormalizeResult::matched(raw, self.node_at(idx), MatchType::Fuzzy, score)
            }
            Some((_, score)) => NormalizeResult::unmatched(raw, score),
            None => NormalizeResult::unmatched(raw, 0.0),
        }
    }

    /// Highest-scoring node over every canonical name and alias. On equal scores
    /// the first node seen wins.
    fn best_fuzzy(&self, key: &str) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;

        for (idx, node) in self.nodes().iter().enumerate() {
            let candidates = std::iter::once(node.canonical_name.as_str())
                .chain(node.aliases.iter().map(String::as_str));
            for candidate in candidates {
                let score = jaro_winkler(key, &candidate.to_lowercase());
                if best.map_or(true, |(_, s)| score > s) {
                    best = Some((idx, score));
                }
            }
        }

        best
    }
}
