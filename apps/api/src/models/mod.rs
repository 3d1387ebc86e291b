pub mod job;
pub mod profile;

pub use job::{JobRequirements, LocationType};
pub use profile::{CandidateProfile, CandidateSkill, Proficiency, RemotePreference};
