//! Alias resolution shared by scoring, gap analysis and catalog matching.
//!
//! One resolver answers "are these two skill strings the same skill?" for every
//! consumer, so the equivalence rules cannot drift between them.

use std::collections::HashMap;

use super::SkillNode;

/// Shortest token allowed to match another skill by containment.
const MIN_CONTAINMENT_LEN: usize = 3;

/// Maps every lower-cased id, canonical name and alias to the lower-cased
/// canonical name of its node.
#[derive(Debug, Clone, Default)]
pub struct AliasResolver {
    canonical: HashMap<String, String>,
}

impl AliasResolver {
    pub fn from_nodes(nodes: &[SkillNode]) -> Self {
        let mut canonical = HashMap::new();
        for node in nodes {
            let name = node.canonical_name.to_lowercase();
            canonical.insert(node.id.to_lowercase(), name.clone());
            for alias in &node.aliases {
                canonical
                    .entry(alias.trim().to_lowercase())
                    .or_insert_with(|| name.clone());
            }
            canonical.insert(name.clone(), name);
        }
        Self { canonical }
    }

    /// Canonical lower-cased name, or the cleaned input if the skill is unknown.
    pub fn resolve(&self, raw: &str) -> String {
        let key = clean(raw);
        match self.canonical.get(&key) {
            Some(name) => name.clone(),
            None => key,
        }
    }

    /// Skill equivalence used when comparing a candidate's skills to a job's:
    /// same text, same canonical skill, or one resolved name is a prefix of the
    /// other (shorter side at least three characters).
    pub fn equivalent(&self, a: &str, b: &str) -> bool {
        self.compare(a, b, |longer, shorter| longer.starts_with(shorter))
    }

    /// Catalog coverage: `listed` (a resource's skill tag) covers `wanted` when
    /// they resolve to the same skill or one contains the other.
    pub fn covers(&self, listed: &str, wanted: &str) -> bool {
        self.compare(listed, wanted, |longer, shorter| longer.contains(shorter))
    }

    fn compare(&self, a: &str, b: &str, contains: impl Fn(&str, &str) -> bool) -> bool {
        let (a, b) = (clean(a), clean(b));
        if a.is_empty() || b.is_empty() {
            return false;
        }
        if a == b {
            return true;
        }

        let (known_a, known_b) = (self.canonical.get(&a), self.canonical.get(&b));
        if let (Some(ca), Some(cb)) = (known_a, known_b) {
            // Two distinct taxonomy skills never collapse into one (java vs javascript).
            return ca == cb;
        }

        let ra = known_a.cloned().unwrap_or(a);
        let rb = known_b.cloned().unwrap_or(b);
        if ra == rb {
            return true;
        }

        let (longer, shorter) = if ra.chars().count() >= rb.chars().count() {
            (ra, rb)
        } else {
            (rb, ra)
        };
        shorter.chars().count() >= MIN_CONTAINMENT_LEN && contains(&longer, &shorter)
    }
}

fn clean(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use crate::taxonomy::Taxonomy;

    fn resolver() -> crate::taxonomy::AliasResolver {
        Taxonomy::builtin().unwrap().aliases().clone()
    }

    #[test]
    fn test_curated_alias_pairs_are_equivalent() {
        let r = resolver();
        for (a, b) in [
            ("golang", "Go"),
            ("k8s", "Kubernetes"),
            ("postgres", "PostgreSQL"),
            ("js", "JavaScript"),
        ] {
            assert!(r.equivalent(a, b), "{a} should be equivalent to {b}");
            assert!(r.equivalent(b, a), "equivalence must be symmetric for {a}/{b}");
        }
    }

    #[test]
    fn test_known_skills_override_prefix_containment() {
        let r = resolver();
        // Plain prefix containment would pair these; both are taxonomy skills,
        // so only their canonical identity decides.
        assert!("javascript".starts_with("java"));
        assert!(!r.equivalent("java", "javascript"));
        assert!(!r.covers("javascript", "java"));
        assert!(!r.equivalent("github", "github actions"));

        // One side unknown: prefix containment still applies.
        assert!(r.equivalent("java spring", "java"));
    }

    #[test]
    fn test_prefix_containment_for_unknown_variants() {
        let r = resolver();
        assert!(r.equivalent("terraform cloud", "terraform"));
        assert!(!r.equivalent("ab", "abc"), "short tokens never match by prefix");
    }

    #[test]
    fn test_covers_allows_substring_containment() {
        let r = resolver();
        assert!(r.covers("advanced docker networking", "docker"));
        assert!(!r.equivalent("advanced docker networking", "docker"));
    }

    #[test]
    fn test_resolve_falls_back_to_cleaned_input() {
        let r = resolver();
        assert_eq!(r.resolve("  Golang "), "go");
        assert_eq!(r.resolve("Quantum Basketweaving"), "quantum basketweaving");
    }

    #[test]
    fn test_empty_strings_never_match() {
        let r = resolver();
        assert!(!r.equivalent("", ""));
        assert!(!r.covers("python", " "));
    }
}
