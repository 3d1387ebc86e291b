//! Skill taxonomy: canonical skill ontology, normalization and text extraction.
//!
//! The table is built once at startup (`Taxonomy::builtin`) and shared read-only
//! through `AppState`. Every alias maps to exactly one node.

pub mod aliases;
pub mod extractor;
pub mod handlers;
pub mod normalizer;
pub mod ontology;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub use aliases::AliasResolver;
pub use extractor::ExtractionResult;
pub use normalizer::NormalizeResult;

use extractor::PhrasePattern;
use ontology::{NodeSpec, BUILTIN_NODES};

/// Top-level grouping of a skill. Drives extraction buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillDomain {
    Technical,
    Soft,
    Domain,
}

/// A canonical skill in the ontology.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillNode {
    pub id: String,
    pub canonical_name: String,
    pub domain: SkillDomain,
    pub category: String,
    pub aliases: Vec<String>,
    pub prerequisites: Vec<String>,
    pub related_skills: Vec<String>,
}

impl From<&NodeSpec> for SkillNode {
    fn from(spec: &NodeSpec) -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        SkillNode {
            id: spec.id.to_string(),
            canonical_name: spec.name.to_string(),
            domain: spec.domain,
            category: spec.category.to_string(),
            aliases: owned(spec.aliases),
            prerequisites: owned(spec.prerequisites),
            related_skills: owned(spec.related),
        }
    }
}

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("duplicate skill id '{0}'")]
    DuplicateId(String),

    #[error("alias '{alias}' of '{id}' is already registered to '{existing}'")]
    DuplicateAlias {
        alias: String,
        id: String,
        existing: String,
    },

    #[error("skill '{id}' references unknown skill '{reference}'")]
    UnknownReference { id: String, reference: String },

    #[error("invalid phrase pattern for '{phrase}': {source}")]
    Pattern {
        phrase: String,
        #[source]
        source: regex::Error,
    },
}

/// Filters for `Taxonomy::search`.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter<'a> {
    pub query: &'a str,
    pub domain: Option<SkillDomain>,
    pub category: Option<&'a str>,
    pub limit: usize,
}

/// Immutable skill table with the lookup indexes derived from it.
pub struct Taxonomy {
    nodes: Vec<SkillNode>,
    /// Lower-cased id and canonical name -> node index.
    exact_index: HashMap<String, usize>,
    /// Lower-cased alias -> node index.
    alias_index: HashMap<String, usize>,
    resolver: AliasResolver,
    /// Multi-word names and aliases, longest first.
    phrase_patterns: Vec<PhrasePattern>,
}

impl Taxonomy {
    /// Builds the taxonomy from the built-in ontology table.
    pub fn builtin() -> Result<Self, TaxonomyError> {
        let taxonomy = Self::from_specs(BUILTIN_NODES)?;
        info!(
            "Skill taxonomy loaded: {} nodes, {} aliases, {} phrase patterns",
            taxonomy.nodes.len(),
            taxonomy.alias_index.len(),
            taxonomy.phrase_patterns.len()
        );
        Ok(taxonomy)
    }

    pub fn from_specs(specs: &[NodeSpec]) -> Result<Self, TaxonomyError> {
        Self::from_nodes(specs.iter().map(SkillNode::from).collect())
    }

    /// Validates the node list and builds every index.
    ///
    /// Fails on duplicate ids, aliases shared between nodes, and prerequisite or
    /// related references to ids that do not exist.
    pub fn from_nodes(nodes: Vec<SkillNode>) -> Result<Self, TaxonomyError> {
        let mut exact_index: HashMap<String, usize> = HashMap::new();
        let mut by_id: HashMap<String, usize> = HashMap::new();

        for (idx, node) in nodes.iter().enumerate() {
            let id = node.id.to_lowercase();
            if by_id.insert(id.clone(), idx).is_some() {
                return Err(TaxonomyError::DuplicateId(node.id.clone()));
            }
            exact_index.insert(id, idx);
            exact_index
                .entry(node.canonical_name.to_lowercase())
                .or_insert(idx);
        }

        let mut alias_index: HashMap<String, usize> = HashMap::new();
        for (idx, node) in nodes.iter().enumerate() {
            for alias in &node.aliases {
                let key = alias.trim().to_lowercase();
                if let Some(&owner) = exact_index.get(&key) {
                    if owner != idx {
                        return Err(TaxonomyError::DuplicateAlias {
                            alias: alias.clone(),
                            id: node.id.clone(),
                            existing: nodes[owner].id.clone(),
                        });
                    }
                    continue;
                }
                if let Some(owner) = alias_index.insert(key, idx) {
                    if owner != idx {
                        return Err(TaxonomyError::DuplicateAlias {
                            alias: alias.clone(),
                            id: node.id.clone(),
                            existing: nodes[owner].id.clone(),
                        });
                    }
                }
            }

            for reference in node.prerequisites.iter().chain(&node.related_skills) {
                if !by_id.contains_key(&reference.to_lowercase()) {
                    return Err(TaxonomyError::UnknownReference {
                        id: node.id.clone(),
                        reference: reference.clone(),
                    });
                }
            }
        }

        let resolver = AliasResolver::from_nodes(&nodes);
        let phrase_patterns = extractor::build_phrase_patterns(&nodes)?;

        Ok(Self {
            nodes,
            exact_index,
            alias_index,
            resolver,
            phrase_patterns,
        })
    }

    pub fn nodes(&self) -> &[SkillNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The shared alias-resolution service used by scoring and catalog matching.
    pub fn aliases(&self) -> &AliasResolver {
        &self.resolver
    }

    /// Looks up a node by id, case-insensitively.
    pub fn lookup(&self, id: &str) -> Option<&SkillNode> {
        let key = id.trim().to_lowercase();
        self.nodes.iter().find(|n| n.id.to_lowercase() == key)
    }

    /// Resolves any name, alias or id to its node without fuzzy matching.
    pub fn resolve_node(&self, raw: &str) -> Option<&SkillNode> {
        let key = raw.trim().to_lowercase();
        self.exact_index
            .get(&key)
            .or_else(|| self.alias_index.get(&key))
            .map(|&idx| &self.nodes[idx])
    }

    pub(crate) fn node_at(&self, idx: usize) -> &SkillNode {
        &self.nodes[idx]
    }

    pub(crate) fn exact_index(&self) -> &HashMap<String, usize> {
        &self.exact_index
    }

    pub(crate) fn alias_index(&self) -> &HashMap<String, usize> {
        &self.alias_index
    }

    pub(crate) fn phrase_patterns(&self) -> &[PhrasePattern] {
        &self.phrase_patterns
    }

    /// Case-insensitive search over ids, canonical names and aliases.
    ///
    /// Ranking: exact name/id/alias hit, then prefix, then substring; ties by name.
    pub fn search(&self, filter: &SearchFilter<'_>) -> Vec<&SkillNode> {
        let query = filter.query.trim().to_lowercase();

        let mut hits: Vec<(u8, &SkillNode)> = self
            .nodes
            .iter()
            .filter(|n| filter.domain.map_or(true, |d| n.domain == d))
            .filter(|n| {
                filter
                    .category
                    .map_or(true, |c| n.category.eq_ignore_ascii_case(c.trim()))
            })
            .filter_map(|n| search_rank(n, &query).map(|rank| (rank, n)))
            .collect();

        hits.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then_with(|| a.1.canonical_name.cmp(&b.1.canonical_name))
        });

        hits.into_iter()
            .take(filter.limit)
            .map(|(_, node)| node)
            .collect()
    }
}

/// Rank of a node against a lower-cased query: 0 exact, 1 prefix, 2 substring.
/// An empty query matches everything at the lowest rank.
fn search_rank(node: &SkillNode, query: &str) -> Option<u8> {
    if query.is_empty() {
        return Some(2);
    }

    let mut keys = vec![node.id.to_lowercase(), node.canonical_name.to_lowercase()];
    keys.extend(node.aliases.iter().map(|a| a.to_lowercase()));

    keys.iter()
        .filter_map(|key| {
            if key == query {
                Some(0)
            } else if key.starts_with(query) {
                Some(1)
            } else if key.contains(query) {
                Some(2)
            } else {
                None
            }
        })
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: &'static str, name: &'static str, aliases: &'static [&'static str]) -> NodeSpec {
        NodeSpec {
            id,
            name,
            domain: SkillDomain::Technical,
            category: "test",
            aliases,
            prerequisites: &[],
            related: &[],
        }
    }

    #[test]
    fn test_builtin_taxonomy_loads() {
        let taxonomy = Taxonomy::builtin().expect("built-in ontology must be valid");
        assert!(taxonomy.len() > 50, "Expected a full ontology, got {}", taxonomy.len());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let specs = [spec("go", "Go", &[]), spec("go", "Golang", &[])];
        let err = Taxonomy::from_specs(&specs).err().expect("duplicate id must fail");
        assert!(matches!(err, TaxonomyError::DuplicateId(id) if id == "go"));
    }

    #[test]
    fn test_alias_shared_between_nodes_rejected() {
        let specs = [spec("go", "Go", &["gl"]), spec("gleam", "Gleam", &["gl"])];
        assert!(matches!(
            Taxonomy::from_specs(&specs),
            Err(TaxonomyError::DuplicateAlias { .. })
        ));
    }

    #[test]
    fn test_alias_colliding_with_other_canonical_name_rejected() {
        let specs = [spec("go", "Go", &[]), spec("golang_tools", "Go Tools", &["go"])];
        assert!(matches!(
            Taxonomy::from_specs(&specs),
            Err(TaxonomyError::DuplicateAlias { .. })
        ));
    }

    #[test]
    fn test_unknown_reference_rejected() {
        let specs = [NodeSpec {
            related: &["missing"],
            ..spec("go", "Go", &[])
        }];
        assert!(matches!(
            Taxonomy::from_specs(&specs),
            Err(TaxonomyError::UnknownReference { .. })
        ));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let taxonomy = Taxonomy::builtin().unwrap();
        let node = taxonomy.lookup("KUBERNETES").expect("kubernetes must exist");
        assert_eq!(node.canonical_name, "Kubernetes");
        assert!(taxonomy.lookup("not-a-skill").is_none());
    }

    #[test]
    fn test_search_ranks_exact_before_prefix() {
        let taxonomy = Taxonomy::builtin().unwrap();
        let hits = taxonomy.search(&SearchFilter {
            query: "java",
            limit: 10,
            ..Default::default()
        });
        assert_eq!(hits[0].id, "java", "exact hit must rank first");
        assert!(hits.iter().any(|n| n.id == "javascript"));
    }

    #[test]
    fn test_search_filters_domain_and_category() {
        let taxonomy = Taxonomy::builtin().unwrap();
        let soft = taxonomy.search(&SearchFilter {
            query: "",
            domain: Some(SkillDomain::Soft),
            limit: 100,
            ..Default::default()
        });
        assert!(!soft.is_empty());
        assert!(soft.iter().all(|n| n.domain == SkillDomain::Soft));

        let databases = taxonomy.search(&SearchFilter {
            query: "",
            category: Some("database"),
            limit: 100,
            ..Default::default()
        });
        assert!(databases.iter().any(|n| n.id == "postgresql"));
        assert!(databases.iter().all(|n| n.category == "database"));
    }

    #[test]
    fn test_search_respects_limit() {
        let taxonomy = Taxonomy::builtin().unwrap();
        let hits = taxonomy.search(&SearchFilter {
            query: "",
            limit: 3,
            ..Default::default()
        });
        assert_eq!(hits.len(), 3);
    }
}
