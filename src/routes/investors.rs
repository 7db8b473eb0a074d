use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::EngineError;
use crate::models::{InvestorListResponse, InvestorSearchResponse, MatchInvestorsRequest, SearchQuery};
use crate::routes::AppState;

/// Investors returned by the unfiltered listing
const LIST_PREVIEW: usize = 20;

/// Configure all investor routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/investors", web::get().to(list_investors))
        .route("/investors/match", web::post().to(match_investors))
        .route("/investors/search", web::get().to(search_investors))
        .route("/investors/{id}", web::get().to(get_investor));
}

/// Match investors endpoint
///
/// POST /api/v1/investors/match
///
/// Request body:
/// ```json
/// {
///   "industry": "Enterprise SaaS",
///   "stage": "Series A",
///   "seekingAmount": 5000000,
///   "location": "San Francisco",
///   "minScore": 50,
///   "maxResults": 15
/// }
/// ```
async fn match_investors(
    state: web::Data<AppState>,
    req: web::Json<MatchInvestorsRequest>,
) -> Result<HttpResponse, EngineError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {}", errors);
        return Err(EngineError::InvalidInput(errors.to_string()));
    }

    let startup = req.to_profile()?;
    let limit = state.settings.matching.max_results_limit;
    let options = state
        .matcher
        .defaults()
        .with_overrides(req.min_score, req.max_results.map(|n| n.min(limit)));

    tracing::info!(
        "Matching investors for {} / {} / {} (min score {}, max {})",
        startup.industry,
        startup.stage,
        startup.location,
        options.min_score,
        options.max_results
    );

    let response = state.matcher.find_matches(&startup, state.investors.all(), options)?;

    tracing::info!("Returning {} investor matches", response.total);
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/v1/investors
async fn list_investors(state: web::Data<AppState>) -> HttpResponse {
    let investors = state.investors.all();
    HttpResponse::Ok().json(InvestorListResponse {
        total: investors.len(),
        investors: investors.iter().take(LIST_PREVIEW).cloned().collect(),
    })
}

/// GET /api/v1/investors/search?q={query}
async fn search_investors(state: web::Data<AppState>, query: web::Query<SearchQuery>) -> HttpResponse {
    let investors: Vec<_> = state.investors.search(&query.q).into_iter().cloned().collect();
    HttpResponse::Ok().json(InvestorSearchResponse {
        query: query.q.clone(),
        results: investors.len(),
        investors,
    })
}

/// GET /api/v1/investors/{id}
async fn get_investor(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, EngineError> {
    let id = id.into_inner();
    let investor = state.investors.get(&id).ok_or(EngineError::NotFound(id))?;
    Ok(HttpResponse::Ok().json(investor))
}
