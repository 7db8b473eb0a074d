//! Deepflow Match - investor matching and warm-introduction path finding
//!
//! Two engines share this crate: a weighted scorer that ranks investors for
//! a startup profile, and a breadth-first path finder that looks for
//! introduction chains through a founder's social graph.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Matcher, MatchOptions, PathFinder};
pub use error::EngineError;
pub use models::{
    ConnectionPath, FundingStage, Investor, InvestorMatch, MatchResponse, NetworkAnalysis, NetworkProfile,
    StartupProfile,
};
pub use services::{InvestorStore, SocialGraph};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let startup = StartupProfile::new("FinTech", FundingStage::Seed, 2_000_000.0, "New York");
        let response = Matcher::with_default_options()
            .find_matches(&startup, InvestorStore::seeded().all(), MatchOptions::default())
            .unwrap();
        assert!(response.matches.iter().all(|m| m.score >= 50));
    }
}
