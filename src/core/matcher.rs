use chrono::{SecondsFormat, Utc};

use crate::core::scoring::{calculate_match, validate_required};
use crate::error::EngineError;
use crate::models::{Investor, InvestorMatch, MatchResponse, StartupProfile};

/// Threshold and cap applied to one matching run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    pub min_score: u8,
    pub max_results: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            min_score: 50,
            max_results: 15,
        }
    }
}

impl MatchOptions {
    /// Apply per-request overrides on top of these options
    pub fn with_overrides(self, min_score: Option<u8>, max_results: Option<usize>) -> Self {
        Self {
            min_score: min_score.unwrap_or(self.min_score),
            max_results: max_results.unwrap_or(self.max_results),
        }
    }
}

/// Investor matching orchestrator
///
/// # Pipeline Stages
/// 1. Active-investor gate
/// 2. Per-investor scoring
/// 3. Minimum score filter
/// 4. Ranking and truncation
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    defaults: MatchOptions,
}

impl Matcher {
    pub fn new(defaults: MatchOptions) -> Self {
        Self { defaults }
    }

    pub fn with_default_options() -> Self {
        Self::default()
    }

    /// Options used when a request does not override them
    pub fn defaults(&self) -> MatchOptions {
        self.defaults
    }

    /// Rank investors for a startup profile
    ///
    /// # Arguments
    /// * `startup` - The startup being matched
    /// * `candidates` - The full investor table
    /// * `options` - Minimum score and result cap
    ///
    /// # Returns
    /// MatchResponse with matches sorted by score, highest first. Ties keep
    /// candidate order but callers must not rely on it.
    pub fn find_matches(
        &self,
        startup: &StartupProfile,
        candidates: &[Investor],
        options: MatchOptions,
    ) -> Result<MatchResponse, EngineError> {
        validate_required(startup)?;

        let mut matches: Vec<InvestorMatch> = candidates
            .iter()
            // Stage 1: only investors currently writing checks
            .filter(|investor| investor.actively_investing)
            // Stage 2 & 3: score and apply threshold
            .map(|investor| calculate_match(startup, investor))
            .filter(|result| {
                result
                    .as_ref()
                    .map_or(true, |m| m.score >= options.min_score)
            })
            .collect::<Result<_, _>>()?;

        // Stage 4: rank and cap
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(options.max_results);

        tracing::debug!(
            "Matched {} of {} investors for {} / {} (min score {})",
            matches.len(),
            candidates.len(),
            startup.industry,
            startup.stage,
            options.min_score
        );

        Ok(MatchResponse {
            total: matches.len(),
            matches,
            query: startup.clone(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FundingStage, InvestmentRange};

    fn create_candidate(id: &str, focus: &str, stage: FundingStage, active: bool) -> Investor {
        Investor {
            id: id.to_string(),
            name: format!("Investor {}", id),
            firm: format!("Firm {}", id),
            title: None,
            email: None,
            linkedin: None,
            focus: vec![focus.to_string()],
            stages: vec![stage],
            investment_range: InvestmentRange { min: 1_000_000.0, max: 10_000_000.0 },
            geographic_preferences: vec!["North America".to_string()],
            portfolio: vec![],
            thesis: None,
            actively_investing: active,
        }
    }

    fn create_startup() -> StartupProfile {
        StartupProfile::new("FinTech", FundingStage::Seed, 2_000_000.0, "New York")
    }

    #[test]
    fn test_find_matches_basic() {
        let matcher = Matcher::with_default_options();
        let candidates = vec![
            create_candidate("1", "FinTech", FundingStage::Seed, true),        // Strong match
            create_candidate("2", "CleanTech", FundingStage::GrowthEquity, true), // Weak match
            create_candidate("3", "FinTech", FundingStage::Seed, false),       // Inactive
        ];

        let result = matcher
            .find_matches(&create_startup(), &candidates, matcher.defaults())
            .unwrap();

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.total, 1);
        assert_eq!(result.matches[0].investor.id, "1");
    }

    #[test]
    fn test_matches_sorted_by_score() {
        let matcher = Matcher::with_default_options();
        let candidates = vec![
            create_candidate("1", "Blockchain", FundingStage::SeriesA, true),
            create_candidate("2", "FinTech", FundingStage::Seed, true),
            create_candidate("3", "Enterprise SaaS", FundingStage::Seed, true),
        ];

        let options = MatchOptions { min_score: 0, max_results: 10 };
        let result = matcher.find_matches(&create_startup(), &candidates, options).unwrap();

        assert_eq!(result.matches.len(), 3);
        assert_eq!(result.matches[0].investor.id, "2");
        for pair in result.matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::with_default_options();
        let candidates: Vec<Investor> = (0..20)
            .map(|i| create_candidate(&i.to_string(), "FinTech", FundingStage::Seed, true))
            .collect();

        let options = matcher.defaults().with_overrides(None, Some(5));
        let result = matcher.find_matches(&create_startup(), &candidates, options).unwrap();

        assert_eq!(result.matches.len(), 5);
    }

    #[test]
    fn test_empty_candidates() {
        let matcher = Matcher::with_default_options();
        let result = matcher
            .find_matches(&create_startup(), &[], MatchOptions::default())
            .unwrap();

        assert!(result.matches.is_empty());
        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_invalid_query_fails_even_without_candidates() {
        let matcher = Matcher::with_default_options();
        let mut startup = create_startup();
        startup.location = "  ".to_string();

        let err = matcher.find_matches(&startup, &[], MatchOptions::default()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn test_overrides() {
        let options = MatchOptions::default().with_overrides(Some(70), None);
        assert_eq!(options, MatchOptions { min_score: 70, max_results: 15 });
    }
}
