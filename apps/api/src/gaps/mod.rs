//! Skill gap analysis: which job skills the candidate lacks, how urgent each
//! one is, and how ready the candidate is overall.

pub mod analyzer;
pub mod handlers;

pub use analyzer::{GapAnalysis, GapAnalyzer, GapCategory, GapOptions, SkillGap};
