// Core algorithm exports
pub mod matcher;
pub mod outreach;
pub mod pathfinder;
pub mod reasons;
pub mod recommendations;
pub mod scoring;
pub mod taxonomy;

pub use matcher::{MatchOptions, Matcher};
pub use outreach::outreach_strategy;
pub use pathfinder::{calculate_path_strength, find_all_paths, PathFinder, DEFAULT_MAX_DEPTH};
pub use scoring::calculate_match;
