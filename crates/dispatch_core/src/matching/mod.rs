//! Driver selection policies.

pub mod algorithm;
pub mod first_fit;

pub use algorithm::MatchingPolicy;
pub use first_fit::FirstFitMatching;
