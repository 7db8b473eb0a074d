//! Fixed lookup tables used by the match scorer.

use crate::models::FundingStage;

/// Funding stages in ascending order
pub const STAGE_ORDER: [FundingStage; 7] = [
    FundingStage::PreSeed,
    FundingStage::Seed,
    FundingStage::SeriesA,
    FundingStage::SeriesB,
    FundingStage::SeriesC,
    FundingStage::SeriesCPlus,
    FundingStage::GrowthEquity,
];

/// Industry -> sectors considered adjacent to it
pub const RELATED_SECTORS: &[(&str, &[&str])] = &[
    ("Enterprise SaaS", &["AI/ML", "Consumer Tech"]),
    ("Consumer Tech", &["E-commerce", "AI/ML"]),
    ("FinTech", &["Enterprise SaaS", "Blockchain"]),
    ("HealthTech", &["AI/ML", "Enterprise SaaS"]),
    ("AI/ML", &["Enterprise SaaS", "HealthTech", "FinTech"]),
];

/// Region name -> place keywords located in it
pub const REGIONS: &[(&str, &[&str])] = &[
    (
        "North America",
        &["US", "USA", "United States", "Canada", "San Francisco", "New York", "Boston", "Austin", "Seattle"],
    ),
    (
        "Europe",
        &["UK", "London", "Berlin", "Paris", "Amsterdam", "Stockholm", "Dublin"],
    ),
    (
        "Asia",
        &["Singapore", "Hong Kong", "Shanghai", "Beijing", "Tokyo", "Seoul", "Bangalore"],
    ),
];

/// Preference token meaning "invests anywhere"
pub const GLOBAL_PREFERENCE: &str = "Global";

/// Position of a stage in [`STAGE_ORDER`]
pub fn stage_index(stage: FundingStage) -> usize {
    STAGE_ORDER
        .iter()
        .position(|s| *s == stage)
        .unwrap_or(STAGE_ORDER.len())
}

/// Sectors related to `industry`; empty for unknown industries
pub fn related_sectors(industry: &str) -> &'static [&'static str] {
    RELATED_SECTORS
        .iter()
        .find(|(name, _)| *name == industry)
        .map(|(_, related)| *related)
        .unwrap_or(&[])
}

/// Regions whose keywords appear in `location` (case-insensitive)
pub fn regions_for_location(location: &str) -> Vec<&'static str> {
    let location = location.to_lowercase();
    REGIONS
        .iter()
        .filter(|(_, places)| places.iter().any(|p| location.contains(&p.to_lowercase())))
        .map(|(region, _)| *region)
        .collect()
}
