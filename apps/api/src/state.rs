use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::gaps::GapAnalyzer;
use crate::recommendation::{RecommendationEngine, ResourceCatalog};
use crate::scoring::AcceptanceScorer;
use crate::taxonomy::Taxonomy;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything behind the `Arc`s is built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub taxonomy: Arc<Taxonomy>,
    pub catalog: Arc<ResourceCatalog>,
    pub scorer: Arc<AcceptanceScorer>,
    pub analyzer: Arc<GapAnalyzer>,
    pub engine: Arc<RecommendationEngine>,
}

impl AppState {
    /// Loads the taxonomy and the catalog named by `config`, then wires every
    /// component to the same read-only tables.
    pub fn build(config: &Config) -> Result<Self> {
        let taxonomy = Arc::new(Taxonomy::builtin().context("Failed to build skill taxonomy")?);
        let catalog = Arc::new(match &config.resource_catalog_path {
            Some(path) => ResourceCatalog::from_path(path)?,
            None => ResourceCatalog::builtin()?,
        });
        Ok(Self::from_parts(taxonomy, catalog))
    }

    pub fn from_parts(taxonomy: Arc<Taxonomy>, catalog: Arc<ResourceCatalog>) -> Self {
        Self {
            scorer: Arc::new(AcceptanceScorer::new(taxonomy.clone())),
            analyzer: Arc::new(GapAnalyzer::new(taxonomy.clone())),
            engine: Arc::new(RecommendationEngine::new(taxonomy.clone(), catalog.clone())),
            taxonomy,
            catalog,
        }
    }
}
