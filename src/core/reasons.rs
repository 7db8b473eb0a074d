use crate::models::{Investor, MatchDetails, StartupProfile};

const STRONG: u8 = 90;
const PARTIAL: u8 = 60;

pub const FALLBACK_REASON: &str = "General sector interest and investment criteria alignment";

/// Build human-readable reasons for a match, in a fixed order
///
/// Industry and stage report both strong and partial fits; amount and
/// location only report strong fits. The portfolio line is added whenever
/// the investor has one, regardless of score.
pub fn generate_reasons(
    startup: &StartupProfile,
    investor: &Investor,
    details: &MatchDetails,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if details.industry_match >= STRONG {
        reasons.push(format!(
            "Perfect industry match: {} focuses on {}",
            investor.name, startup.industry
        ));
    } else if details.industry_match >= PARTIAL {
        reasons.push("Related sector interest: Investor has adjacent focus areas".to_string());
    }

    if details.stage_match >= STRONG {
        reasons.push(format!(
            "Stage alignment: {} actively invests in {}",
            investor.name, startup.stage
        ));
    } else if details.stage_match >= PARTIAL {
        reasons.push(format!(
            "Adjacent stage: Investor occasionally invests in {}",
            startup.stage
        ));
    }

    if details.amount_match >= STRONG {
        reasons.push(format!(
            "Investment range fit: ${:.1}M is within investor's typical range",
            startup.seeking_amount / 1_000_000.0
        ));
    }

    if details.location_match >= STRONG {
        reasons.push(format!("Geographic match: Investor active in {}", startup.location));
    }

    if !investor.portfolio.is_empty() {
        let highlights: Vec<&str> = investor.portfolio.iter().take(2).map(String::as_str).collect();
        reasons.push(format!(
            "Strong portfolio: {} companies including {}",
            investor.portfolio.len(),
            highlights.join(", ")
        ));
    }

    if reasons.is_empty() {
        reasons.push(FALLBACK_REASON.to_string());
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FundingStage, InvestmentRange};

    fn investor(portfolio: Vec<&str>) -> Investor {
        Investor {
            id: "6".to_string(),
            name: "James Anderson".to_string(),
            firm: "Y Combinator".to_string(),
            title: None,
            email: None,
            linkedin: None,
            focus: vec!["FinTech".to_string()],
            stages: vec![FundingStage::Seed],
            investment_range: InvestmentRange { min: 50_000.0, max: 500_000.0 },
            geographic_preferences: vec!["Global".to_string()],
            portfolio: portfolio.into_iter().map(String::from).collect(),
            thesis: None,
            actively_investing: true,
        }
    }

    fn details(industry: u8, stage: u8, amount: u8, location: u8) -> MatchDetails {
        MatchDetails {
            industry_match: industry,
            stage_match: stage,
            amount_match: amount,
            location_match: location,
        }
    }

    #[test]
    fn test_strong_reasons_in_order() {
        let startup = StartupProfile::new("FinTech", FundingStage::Seed, 300_000.0, "Berlin");
        let reasons = generate_reasons(&startup, &investor(vec![]), &details(100, 100, 100, 100));

        assert_eq!(
            reasons,
            vec![
                "Perfect industry match: James Anderson focuses on FinTech",
                "Stage alignment: James Anderson actively invests in Seed",
                "Investment range fit: $0.3M is within investor's typical range",
                "Geographic match: Investor active in Berlin",
            ]
        );
    }

    #[test]
    fn test_partial_reasons() {
        let startup = StartupProfile::new("AI/ML", FundingStage::SeriesA, 1_000_000.0, "Lagos");
        let reasons = generate_reasons(&startup, &investor(vec![]), &details(60, 70, 70, 60));

        assert_eq!(
            reasons,
            vec![
                "Related sector interest: Investor has adjacent focus areas",
                "Adjacent stage: Investor occasionally invests in Series A",
            ]
        );
    }

    #[test]
    fn test_portfolio_always_reported() {
        let startup = StartupProfile::new("CleanTech", FundingStage::GrowthEquity, 1.0, "Lagos");
        let reasons = generate_reasons(
            &startup,
            &investor(vec!["Airbnb", "Dropbox", "Stripe"]),
            &details(20, 10, 10, 30),
        );

        assert_eq!(reasons, vec!["Strong portfolio: 3 companies including Airbnb, Dropbox"]);
    }

    #[test]
    fn test_fallback_reason() {
        let startup = StartupProfile::new("CleanTech", FundingStage::GrowthEquity, 1.0, "Lagos");
        let reasons = generate_reasons(&startup, &investor(vec![]), &details(20, 10, 40, 30));

        assert_eq!(reasons, vec![FALLBACK_REASON]);
    }
}
