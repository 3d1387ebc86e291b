//! Skill extraction from free text.
//!
//! Pass 1 consumes multi-word names and aliases (longest first) so "machine
//! learning" is never also counted as "learning". Pass 2 tokenizes what is left
//! and normalizes each token on its own.

use std::collections::{HashMap, HashSet};

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::normalizer::MatchType;
use super::{SkillDomain, SkillNode, Taxonomy, TaxonomyError};

const ALIAS_CONFIDENCE: f64 = 0.95;
const FUZZY_CONFIDENCE_FACTOR: f64 = 0.9;
const UNKNOWN_CONFIDENCE: f64 = 0.3;
const UNKNOWN_MIN_LEN: usize = 2;
const UNKNOWN_MAX_LEN: usize = 50;

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "all", "also", "am", "an", "and", "any", "are", "as", "at",
    "be", "been", "being", "both", "but", "by", "can", "could", "did", "do", "does", "each",
    "etc", "experience", "experienced", "for", "from", "had", "has", "have", "he", "her", "his",
    "i", "if", "in", "into", "is", "it", "its", "knowledge", "me", "more", "most", "my", "of",
    "on", "or", "our", "over", "plus", "proficient", "proficiency", "required", "she", "should",
    "skills", "strong", "such", "than", "that", "the", "their", "them", "then", "there", "these",
    "they", "this", "to", "under", "understanding", "up", "us", "using", "very", "was", "we",
    "well", "were", "what", "when", "which", "while", "who", "will", "with", "work", "worked",
    "working", "would", "year", "years", "you", "your",
];

/// A compiled multi-word name or alias.
pub struct PhrasePattern {
    pub regex: Regex,
    pub phrase: String,
    pub node_index: usize,
    pub from_alias: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedSkill {
    pub canonical_id: Option<String>,
    pub canonical_name: String,
    pub matched_text: String,
    pub match_type: MatchType,
    pub confidence: f64,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub technical: Vec<ExtractedSkill>,
    pub soft: Vec<ExtractedSkill>,
    pub domain: Vec<ExtractedSkill>,
    pub unknown: Vec<ExtractedSkill>,
    pub total_found: usize,
}

impl ExtractionResult {
    pub fn all(&self) -> impl Iterator<Item = &ExtractedSkill> {
        self.technical
            .iter()
            .chain(&self.soft)
            .chain(&self.domain)
            .chain(&self.unknown)
    }
}

/// Builds one case-insensitive, whitespace/hyphen tolerant pattern per
/// multi-word canonical name or alias, sorted longest first.
pub(super) fn build_phrase_patterns(nodes: &[SkillNode]) -> Result<Vec<PhrasePattern>, TaxonomyError> {
    let mut patterns = Vec::new();

    for (node_index, node) in nodes.iter().enumerate() {
        let phrases = std::iter::once((node.canonical_name.as_str(), false))
            .chain(node.aliases.iter().map(|a| (a.as_str(), true)));

        for (phrase, from_alias) in phrases {
            let words: Vec<&str> = phrase
                .split(|c: char| c.is_whitespace() || c == '-')
                .filter(|w| !w.is_empty())
                .collect();
            if words.len() < 2 {
                continue;
            }

            let body = words
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join(r"[\s\-]+");
            let starts_word = words[0].starts_with(|c: char| c.is_alphanumeric());
            let ends_word = words[words.len() - 1].ends_with(|c: char| c.is_alphanumeric());
            let source = format!(
                "(?i){}{}{}",
                if starts_word { r"\b" } else { "" },
                body,
                if ends_word { r"\b" } else { "" },
            );

            let regex = Regex::new(&source).map_err(|source| TaxonomyError::Pattern {
                phrase: phrase.to_string(),
                source,
            })?;
            patterns.push(PhrasePattern {
                regex,
                phrase: phrase.to_lowercase(),
                node_index,
                from_alias,
            });
        }
    }

    patterns.sort_by(|a, b| b.phrase.len().cmp(&a.phrase.len()));
    Ok(patterns)
}

/// Collects extracted skills, keeping one entry per canonical id (highest confidence).
#[derive(Default)]
struct Collector {
    skills: Vec<(SkillDomain, ExtractedSkill)>,
    by_id: HashMap<String, usize>,
    unknown: Vec<ExtractedSkill>,
    unknown_seen: HashSet<String>,
}

impl Collector {
    fn push_known(&mut self, node: &SkillNode, matched_text: &str, match_type: MatchType, confidence: f64) {
        let skill = ExtractedSkill {
            canonical_id: Some(node.id.clone()),
            canonical_name: node.canonical_name.clone(),
            matched_text: matched_text.to_string(),
            match_type,
            confidence,
            category: Some(node.category.clone()),
        };

        match self.by_id.get(&node.id) {
            Some(&idx) if self.skills[idx].1.confidence >= confidence => {}
            Some(&idx) => self.skills[idx].1 = skill,
            None => {
                self.by_id.insert(node.id.clone(), self.skills.len());
                self.skills.push((node.domain, skill));
            }
        }
    }

    fn push_unknown(&mut self, token: &str) {
        let key = token.to_lowercase();
        if self.unknown_seen.insert(key.clone()) {
            self.unknown.push(ExtractedSkill {
                canonical_id: None,
                canonical_name: key,
                matched_text: token.to_string(),
                match_type: MatchType::None,
                confidence: UNKNOWN_CONFIDENCE,
                category: None,
            });
        }
    }

    fn finish(self) -> ExtractionResult {
        let mut result = ExtractionResult::default();
        for (domain, skill) in self.skills {
            match domain {
                SkillDomain::Technical => result.technical.push(skill),
                SkillDomain::Soft => result.soft.push(skill),
                SkillDomain::Domain => result.domain.push(skill),
            }
        }
        result.unknown = self.unknown;
        result.total_found =
            result.technical.len() + result.soft.len() + result.domain.len() + result.unknown.len();
        result
    }
}

impl Taxonomy {
    /// Extracts skills from unstructured text. Empty text yields an empty result.
    pub fn extract(&self, text: &str, include_unknown: bool) -> ExtractionResult {
        if text.trim().is_empty() {
            return ExtractionResult::default();
        }

        let mut collector = Collector::default();
        let mut remaining = text.to_string();

        for pattern in self.phrase_patterns() {
            let mut hit: Option<String> = None;
            let consumed = pattern.regex.replace_all(&remaining, |caps: &regex::Captures| {
                hit.get_or_insert_with(|| caps[0].to_string());
                " ".repeat(caps[0].len())
            });
            let consumed = consumed.into_owned();

            if let Some(matched) = hit {
                let (match_type, confidence) = if pattern.from_alias {
                    (MatchType::Alias, ALIAS_CONFIDENCE)
                } else {
                    (MatchType::Exact, 1.0)
                };
                collector.push_known(self.node_at(pattern.node_index), &matched, match_type, confidence);
                remaining = consumed;
            }
        }

        for token in tokenize(&remaining) {
            if is_stop_word(token) {
                continue;
            }

            let normalized = self.normalize(token);
            let confidence = match normalized.match_type {
                MatchType::Exact => 1.0,
                MatchType::Alias => ALIAS_CONFIDENCE,
                MatchType::Fuzzy => normalized.fuzzy_score * FUZZY_CONFIDENCE_FACTOR,
                MatchType::None => {
                    if include_unknown && admissible_unknown(token) {
                        collector.push_unknown(token);
                    }
                    continue;
                }
            };

            if let Some(node) = normalized
                .canonical_id
                .as_deref()
                .and_then(|id| self.lookup(id))
            {
                collector.push_known(node, token, normalized.match_type, confidence);
            }
        }

        let result = collector.finish();
        debug!(
            "Extracted {} skills ({} unknown) from {} chars",
            result.total_found,
            result.unknown.len(),
            text.len()
        );
        result
    }
}

/// Splits on whitespace and punctuation, keeping the characters that appear
/// inside skill names (`c++`, `c#`, `node.js`, `ci/cd`).
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| {
        c.is_whitespace()
            || matches!(
                c,
                ',' | ';' | ':' | '(' | ')' | '[' | ']' | '{' | '}' | '"' | '\'' | '!' | '?' | '|' | '&' | '*' | '<' | '>'
            )
    })
    .map(|t| t.trim_end_matches(['.', '/', '-']).trim_start_matches(['/', '-']))
    .filter(|t| !t.is_empty())
}

fn is_stop_word(token: &str) -> bool {
    let lower = token.to_lowercase();
    STOP_WORDS.contains(&lower.as_str())
}

fn admissible_unknown(token: &str) -> bool {
    let len = token.chars().count();
    (UNKNOWN_MIN_LEN..=UNKNOWN_MAX_LEN).contains(&len)
        && token.chars().any(char::is_alphabetic)
        && !token.starts_with(|c: char| c.is_ascii_digit())
}
