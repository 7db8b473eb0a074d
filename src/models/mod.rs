// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ConnectionPath, FundingStage, InvestmentRange, Investor, InvestorMatch, MatchDetails,
    NetworkAnalysis, NetworkGraph, NetworkProfile, ScoringWeights, StartupProfile,
    SCORING_WEIGHTS,
};
pub use requests::{ConnectionPathRequest, MatchInvestorsRequest, SearchQuery};
pub use responses::{
    ErrorResponse, HealthResponse, InvestorListResponse, InvestorSearchResponse, MatchResponse,
    OutreachResponse, ProfileSearchResponse,
};
