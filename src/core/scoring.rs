use crate::core::reasons::generate_reasons;
use crate::core::taxonomy::{regions_for_location, related_sectors, stage_index, GLOBAL_PREFERENCE};
use crate::error::EngineError;
use crate::models::{
    FundingStage, InvestmentRange, Investor, InvestorMatch, MatchDetails, StartupProfile, SCORING_WEIGHTS,
};

/// Score one investor against a startup profile (0-100)
///
/// Scoring formula:
/// primary = (
///     industry_score * 0.30 +     # exact focus, related sector, or floor
///     stage_score * 0.25 +        # exact stage or distance in stage order
///     amount_score * 0.15 +       # inside / near / far from investment range
///     location_score * 0.10       # direct, regional, or global preference
/// )
/// score = round(primary * 0.8 + secondary * 0.2)
pub fn calculate_match(
    startup: &StartupProfile,
    investor: &Investor,
) -> Result<InvestorMatch, EngineError> {
    validate_required(startup)?;

    let details = MatchDetails {
        industry_match: calculate_industry_score(&startup.industry, &investor.focus),
        stage_match: calculate_stage_score(startup.stage, &investor.stages),
        amount_match: calculate_amount_score(startup.seeking_amount, &investor.investment_range),
        location_match: calculate_location_score(&startup.location, &investor.geographic_preferences),
    };
    let secondary = calculate_secondary_score(startup, investor);

    Ok(InvestorMatch {
        investor: investor.clone(),
        score: compose_score(&details, secondary),
        reasons: generate_reasons(startup, investor, &details),
        match_details: details,
    })
}

/// Reject profiles whose required fields are empty or unusable
pub fn validate_required(startup: &StartupProfile) -> Result<(), EngineError> {
    if startup.industry.trim().is_empty() {
        return Err(EngineError::InvalidInput("industry is required".to_string()));
    }
    if startup.location.trim().is_empty() {
        return Err(EngineError::InvalidInput("location is required".to_string()));
    }
    if !startup.seeking_amount.is_finite() || startup.seeking_amount < 0.0 {
        return Err(EngineError::InvalidInput(format!(
            "seekingAmount must be a non-negative number, got {}",
            startup.seeking_amount
        )));
    }
    Ok(())
}

/// Weighted combination of the four sub-scores and the secondary score
pub fn compose_score(details: &MatchDetails, secondary: f64) -> u8 {
    let w = SCORING_WEIGHTS;
    let primary = f64::from(details.industry_match) * w.industry
        + f64::from(details.stage_match) * w.stage
        + f64::from(details.amount_match) * w.amount
        + f64::from(details.location_match) * w.location;

    (primary * w.primary + secondary * w.secondary).round().clamp(0.0, 100.0) as u8
}

/// Industry score: 100 exact, 60 related sector, 20 floor
#[inline]
pub fn calculate_industry_score(industry: &str, focus: &[String]) -> u8 {
    if focus.iter().any(|f| f == industry) {
        return 100;
    }

    let related = related_sectors(industry);
    if focus.iter().any(|f| related.contains(&f.as_str())) {
        return 60;
    }

    20
}

/// Stage score from the closest investor stage in the stage order
#[inline]
pub fn calculate_stage_score(stage: FundingStage, investor_stages: &[FundingStage]) -> u8 {
    if investor_stages.contains(&stage) {
        return 100;
    }

    let target = stage_index(stage);
    let closest = investor_stages
        .iter()
        .map(|s| stage_index(*s).abs_diff(target))
        .min();

    match closest {
        Some(1) => 70,
        Some(2) => 40,
        _ => 10,
    }
}

/// Amount score against the investor's range
///
/// Bands are checked in order: inside, within 30%, far outside, otherwise.
#[inline]
pub fn calculate_amount_score(amount: f64, range: &InvestmentRange) -> u8 {
    if range.contains(amount) {
        return 100;
    }

    let InvestmentRange { min, max } = *range;

    if amount < min && amount >= min * 0.7 {
        return 70;
    }
    if amount > max && amount <= max * 1.3 {
        return 70;
    }

    if amount < min * 0.5 || amount > max * 2.0 {
        return 10;
    }

    40
}

/// Location score: 100 direct, 70 regional, 60 global, 30 floor
#[inline]
pub fn calculate_location_score(location: &str, preferences: &[String]) -> u8 {
    let location_lc = location.to_lowercase();

    let direct = preferences.iter().any(|pref| {
        let pref_lc = pref.to_lowercase();
        location_lc.contains(&pref_lc) || pref_lc.contains(&location_lc)
    });
    if direct {
        return 100;
    }

    let regional = regions_for_location(location).into_iter().any(|region| {
        let region_lc = region.to_lowercase();
        preferences.iter().any(|pref| pref.to_lowercase().contains(&region_lc))
    });
    if regional {
        return 70;
    }

    if preferences.iter().any(|pref| pref == GLOBAL_PREFERENCE) {
        return 60;
    }

    30
}

/// Secondary score from optional signals, 50 when none apply
///
/// Technology counts only when the investor has a non-empty thesis to compare
/// against; growth counts only above 100%. The score never exceeds 80.
pub fn calculate_secondary_score(startup: &StartupProfile, investor: &Investor) -> f64 {
    let mut score = 0.0;
    let mut factors = 0u32;

    let thesis = investor.thesis.as_deref().filter(|t| !t.is_empty());
    if let (Some(technology), Some(thesis)) = (&startup.technology, thesis) {
        factors += 1;
        let thesis_lc = thesis.to_lowercase();
        if technology.iter().any(|tech| thesis_lc.contains(&tech.to_lowercase())) {
            score += 80.0;
        }
    }

    if startup.growth_rate.is_some_and(|rate| rate > 100.0) {
        factors += 1;
        score += 70.0;
    }

    if factors > 0 {
        score / f64::from(factors)
    } else {
        50.0
    }
}
