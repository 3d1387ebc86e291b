//! Learning resource catalog. Loaded once at startup, read-only afterwards.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

const BUILTIN_CATALOG: &str = include_str!("../../data/resources.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Course,
    Book,
    Tutorial,
    Video,
    Project,
    Documentation,
    Certification,
    Practice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    AllLevels,
}

impl Difficulty {
    /// 1 (beginner) through 4 (expert); `all_levels` sits at 2.
    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Intermediate | Difficulty::AllLevels => 2,
            Difficulty::Advanced => 3,
            Difficulty::Expert => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostType {
    Free,
    /// Free to audit; certificate costs extra.
    FreeAudit,
    Paid,
    Subscription,
}

impl CostType {
    pub fn is_free(&self) -> bool {
        matches!(self, CostType::Free | CostType::FreeAudit)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResourceEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    pub provider: String,
    pub resource_type: ResourceType,
    pub difficulty: Difficulty,
    pub cost_type: CostType,
    #[serde(default)]
    pub cost_amount: f64,
    #[serde(default)]
    pub duration_hours: Option<f64>,
    pub skills_covered: Vec<String>,
    pub primary_skill: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub rating_count: u64,
    #[serde(default)]
    pub has_certificate: bool,
    #[serde(default)]
    pub hands_on: bool,
    #[serde(default)]
    pub verified: bool,
}

impl ResourceEntry {
    /// Cost actually paid when the resource is taken for free where possible.
    pub fn effective_cost(&self) -> f64 {
        if self.cost_type.is_free() {
            0.0
        } else {
            self.cost_amount.max(0.0)
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    entries: Vec<ResourceEntry>,
}

impl ResourceCatalog {
    pub fn builtin() -> Result<Self> {
        let catalog = Self::from_json(BUILTIN_CATALOG).context("built-in resource catalog is invalid")?;
        info!("Resource catalog loaded: {} built-in entries", catalog.len());
        Ok(catalog)
    }

    /// Loads a replacement catalog from a JSON array on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read resource catalog '{}'", path.display()))?;
        let catalog = Self::from_json(&raw)
            .with_context(|| format!("Invalid resource catalog '{}'", path.display()))?;
        info!(
            "Resource catalog loaded: {} entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let entries: Vec<ResourceEntry> = serde_json::from_str(raw)?;
        Self::new(entries)
    }

    /// Rejects duplicate ids and entries without a primary skill.
    pub fn new(entries: Vec<ResourceEntry>) -> Result<Self> {
        let mut ids = HashSet::new();
        for entry in &entries {
            if !ids.insert(entry.id.as_str()) {
                bail!("duplicate resource id '{}'", entry.id);
            }
            if entry.primary_skill.trim().is_empty() {
                bail!("resource '{}' has no primary skill", entry.id);
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = ResourceCatalog::builtin().unwrap();
        assert!(catalog.len() >= 40);
        assert!(catalog.entries().iter().all(|e| !e.skills_covered.is_empty()));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = ResourceCatalog::builtin().unwrap();
        let mut entries = catalog.entries().to_vec();
        entries.push(entries[0].clone());
        let err = ResourceCatalog::new(entries).unwrap_err();
        assert!(err.to_string().contains("duplicate resource id"));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let raw = r#"[{"id": "x", "title": "X", "url": "u", "provider": "p",
            "resourceType": "course", "difficulty": "beginner", "costType": "free",
            "skillsCovered": ["go"], "primarySkill": "go", "sponsor": "acme"}]"#;
        assert!(ResourceCatalog::from_json(raw).is_err());
    }

    #[test]
    fn test_free_audit_costs_nothing() {
        let catalog = ResourceCatalog::builtin().unwrap();
        let audit = catalog
            .entries()
            .iter()
            .find(|e| e.cost_type == CostType::FreeAudit)
            .unwrap();
        assert!(audit.cost_amount > 0.0);
        assert_eq!(audit.effective_cost(), 0.0);
    }
}
