use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::EngineError;
use crate::models::domain::{FundingStage, StartupProfile};

/// Request to match investors for a startup
///
/// Required profile fields are optional here so that a missing field is
/// reported as an invalid-input error rather than a JSON parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchInvestorsRequest {
    #[serde(rename = "startupName", default)]
    pub startup_name: Option<String>,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[validate(range(min = 0.0))]
    #[serde(rename = "seekingAmount", default)]
    pub seeking_amount: Option<f64>,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub location: Option<String>,
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
    #[validate(range(max = 100))]
    #[serde(rename = "minScore", default)]
    pub min_score: Option<u8>,
    #[validate(range(min = 1))]
    #[serde(rename = "maxResults", default)]
    pub max_results: Option<usize>,
}

impl MatchInvestorsRequest {
    /// Build the startup profile, failing on the first missing required field
    pub fn to_profile(&self) -> Result<StartupProfile, EngineError> {
        let industry = required(&self.industry, "industry")?;
        let location = required(&self.location, "location")?;
        let stage_label = required(&self.stage, "stage")?;
        let stage: FundingStage = stage_label.parse().map_err(EngineError::InvalidInput)?;
        let seeking_amount = self
            .seeking_amount
            .ok_or_else(|| EngineError::InvalidInput("seekingAmount is required".to_string()))?;

        Ok(StartupProfile {
            name: self.startup_name.clone(),
            industry,
            stage,
            seeking_amount,
            location,
            description: self.description.clone(),
            team_size: self.team_size,
            revenue: self.revenue,
            growth_rate: self.growth_rate,
            technology: self.technology.clone(),
            business_model: self.business_model.clone(),
        })
    }
}

fn required(value: &Option<String>, field: &str) -> Result<String, EngineError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(EngineError::InvalidInput(format!("{} is required", field))),
    }
}

/// Request for connection paths between a founder and an investor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConnectionPathRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "founder_id", rename = "founderId")]
    pub founder_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "investor_id", rename = "investorId")]
    pub investor_id: String,
    #[serde(alias = "max_depth", rename = "maxDepth", default)]
    pub max_depth: Option<usize>,
}

/// Free-text search query (`?q=`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(alias = "query", alias = "name", default)]
    pub q: String,
}
