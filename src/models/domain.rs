use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Funding stage, ordered from earliest to latest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FundingStage {
    #[serde(rename = "Pre-Seed")]
    PreSeed,
    #[serde(rename = "Seed")]
    Seed,
    #[serde(rename = "Series A")]
    SeriesA,
    #[serde(rename = "Series B")]
    SeriesB,
    #[serde(rename = "Series C")]
    SeriesC,
    #[serde(rename = "Series C+")]
    SeriesCPlus,
    #[serde(rename = "Growth Equity")]
    GrowthEquity,
}

impl FundingStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            FundingStage::PreSeed => "Pre-Seed",
            FundingStage::Seed => "Seed",
            FundingStage::SeriesA => "Series A",
            FundingStage::SeriesB => "Series B",
            FundingStage::SeriesC => "Series C",
            FundingStage::SeriesCPlus => "Series C+",
            FundingStage::GrowthEquity => "Growth Equity",
        }
    }
}

impl fmt::Display for FundingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FundingStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::core::taxonomy::STAGE_ORDER
            .iter()
            .copied()
            .find(|stage| stage.as_str() == s.trim())
            .ok_or_else(|| format!("unknown funding stage '{}'", s))
    }
}

/// Inclusive investment range in dollars
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRange {
    pub min: f64,
    pub max: f64,
}

impl InvestmentRange {
    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.min && amount <= self.max
    }

    /// Both bounds non-negative and `min <= max`
    pub fn is_valid(&self) -> bool {
        self.min >= 0.0 && self.min <= self.max
    }
}

/// Investor record as loaded into the candidate store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investor {
    pub id: String,
    pub name: String,
    pub firm: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    pub focus: Vec<String>,
    pub stages: Vec<FundingStage>,
    #[serde(rename = "investmentRange")]
    pub investment_range: InvestmentRange,
    #[serde(rename = "geographicPreferences", default)]
    pub geographic_preferences: Vec<String>,
    #[serde(default)]
    pub portfolio: Vec<String>,
    #[serde(default)]
    pub thesis: Option<String>,
    #[serde(rename = "activelyInvesting", default = "default_true")]
    pub actively_investing: bool,
}

fn default_true() -> bool { true }

/// Startup profile matched against the investor table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupProfile {
    #[serde(default)]
    pub name: Option<String>,
    pub industry: String,
    pub stage: FundingStage,
    #[serde(rename = "seekingAmount")]
    pub seeking_amount: f64,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "teamSize", default)]
    pub team_size: Option<u32>,
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(rename = "growthRate", default)]
    pub growth_rate: Option<f64>,
    #[serde(default)]
    pub technology: Option<Vec<String>>,
    #[serde(rename = "businessModel", default)]
    pub business_model: Option<String>,
}

impl StartupProfile {
    /// Minimal profile with only the required fields set
    pub fn new(
        industry: impl Into<String>,
        stage: FundingStage,
        seeking_amount: f64,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: None,
            industry: industry.into(),
            stage,
            seeking_amount,
            location: location.into(),
            description: None,
            team_size: None,
            revenue: None,
            growth_rate: None,
            technology: None,
            business_model: None,
        }
    }
}

/// Per-criterion sub-scores, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetails {
    #[serde(rename = "industryMatch")]
    pub industry_match: u8,
    #[serde(rename = "stageMatch")]
    pub stage_match: u8,
    #[serde(rename = "amountMatch")]
    pub amount_match: u8,
    #[serde(rename = "locationMatch")]
    pub location_match: u8,
}

/// One scored investor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorMatch {
    pub investor: Investor,
    pub score: u8,
    pub reasons: Vec<String>,
    #[serde(rename = "matchDetails")]
    pub match_details: MatchDetails,
}

/// Scoring weights. Fixed constants, not configurable.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub industry: f64,
    pub stage: f64,
    pub amount: f64,
    pub location: f64,
    pub primary: f64,
    pub secondary: f64,
}

pub const SCORING_WEIGHTS: ScoringWeights = ScoringWeights {
    industry: 0.3,
    stage: 0.25,
    amount: 0.15,
    location: 0.1,
    primary: 0.8,
    secondary: 0.2,
};

/// Person in the social graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "linkedinUrl", default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub connections: u32,
}

/// A simple path from founder to target through the social graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionPath {
    pub target: NetworkProfile,
    pub path: Vec<NetworkProfile>,
    pub degree: usize,
    pub strength: u8,
    #[serde(rename = "mutualConnections")]
    pub mutual_connections: Vec<NetworkProfile>,
    #[serde(rename = "recommendedApproach")]
    pub recommended_approach: String,
}

impl ConnectionPath {
    /// Profiles strictly between the two endpoints
    pub fn intermediaries(&self) -> &[NetworkProfile] {
        if self.path.len() <= 2 {
            return &[];
        }
        &self.path[1..self.path.len() - 1]
    }
}

/// Reachability analysis for a single target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkAnalysis {
    pub target: String,
    #[serde(rename = "targetProfile")]
    pub target_profile: NetworkProfile,
    pub reachable: bool,
    #[serde(rename = "bestPath", skip_serializing_if = "Option::is_none", default)]
    pub best_path: Option<ConnectionPath>,
    #[serde(rename = "alternativePaths")]
    pub alternative_paths: Vec<ConnectionPath>,
    pub recommendations: Vec<String>,
}

/// All discovered paths between two profiles, for visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkGraph {
    pub founder: NetworkProfile,
    pub investor: NetworkProfile,
    pub paths: Vec<ConnectionPath>,
    #[serde(rename = "shortestPath")]
    pub shortest_path: Option<ConnectionPath>,
    #[serde(rename = "totalPaths")]
    pub total_paths: usize,
}
