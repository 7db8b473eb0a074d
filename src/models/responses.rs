use serde::{Deserialize, Serialize};
use crate::models::domain::{Investor, InvestorMatch, NetworkProfile, StartupProfile};

/// Ranked investor matches for one startup profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub matches: Vec<InvestorMatch>,
    pub total: usize,
    pub query: StartupProfile,
    /// RFC 3339 generation time
    pub timestamp: String,
}

/// Investor listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorListResponse {
    pub total: usize,
    pub investors: Vec<Investor>,
}

/// Investor search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorSearchResponse {
    pub query: String,
    pub results: usize,
    pub investors: Vec<Investor>,
}

/// Network profile search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSearchResponse {
    pub query: String,
    pub results: usize,
    pub profiles: Vec<NetworkProfile>,
}

/// Outreach strategy rendered as markdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutreachResponse {
    pub target: String,
    pub reachable: bool,
    pub strategy: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub investors: usize,
    pub profiles: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
