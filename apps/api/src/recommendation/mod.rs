//! Learning plan generation: resource catalog, matching, phases and timeline.

pub mod catalog;
pub mod engine;
pub mod handlers;
pub mod matcher;
pub mod phases;
pub mod summary;
pub mod timeline;

pub use catalog::ResourceCatalog;
pub use engine::RecommendationEngine;
