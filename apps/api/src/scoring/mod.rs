// Acceptance-likelihood scoring: five independent components blended by fixed weights.
// Pure functions over the request's profile/job plus the shared alias resolver.

pub mod components;
pub mod handlers;
pub mod scorer;

pub use scorer::{AcceptanceScorer, ScoreBreakdown};
