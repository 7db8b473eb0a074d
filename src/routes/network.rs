use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::outreach_strategy;
use crate::error::EngineError;
use crate::models::{ConnectionPathRequest, OutreachResponse, ProfileSearchResponse, SearchQuery};
use crate::routes::AppState;

/// Configure all network routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/network/path", web::post().to(find_connection_path))
        .route("/network/graph", web::post().to(network_graph))
        .route("/network/outreach", web::post().to(outreach))
        .route("/network/profiles/search", web::get().to(search_profiles))
        .route("/network/profiles/{id}", web::get().to(get_profile));
}

fn validated(req: &ConnectionPathRequest) -> Result<(), EngineError> {
    req.validate().map_err(|errors| {
        tracing::info!("Validation failed for network request: {}", errors);
        EngineError::InvalidInput(errors.to_string())
    })
}

/// Requested depth, or the configured default, capped at the configured limit
fn resolve_depth(state: &AppState, requested: Option<usize>) -> usize {
    let network = &state.settings.network;
    requested.unwrap_or(network.max_depth).min(network.max_depth_limit)
}

/// Connection path endpoint
///
/// POST /api/v1/network/path
///
/// Request body:
/// ```json
/// { "founderId": "founder1", "investorId": "vc1", "maxDepth": 3 }
/// ```
async fn find_connection_path(
    state: web::Data<AppState>,
    req: web::Json<ConnectionPathRequest>,
) -> Result<HttpResponse, EngineError> {
    validated(&req)?;
    let depth = resolve_depth(&state, req.max_depth);

    tracing::info!("Finding paths {} -> {} (max depth {})", req.founder_id, req.investor_id, depth);

    let analysis = state
        .pathfinder
        .find_connection_paths(&req.founder_id, &req.investor_id, depth)?;
    Ok(HttpResponse::Ok().json(analysis))
}

/// POST /api/v1/network/graph
async fn network_graph(
    state: web::Data<AppState>,
    req: web::Json<ConnectionPathRequest>,
) -> Result<HttpResponse, EngineError> {
    validated(&req)?;
    let depth = resolve_depth(&state, req.max_depth);

    let graph = state.pathfinder.network_graph(&req.founder_id, &req.investor_id, depth)?;
    tracing::info!("Found {} paths {} -> {}", graph.total_paths, req.founder_id, req.investor_id);
    Ok(HttpResponse::Ok().json(graph))
}

/// Outreach plan built from the default-depth analysis
///
/// POST /api/v1/network/outreach
async fn outreach(
    state: web::Data<AppState>,
    req: web::Json<ConnectionPathRequest>,
) -> Result<HttpResponse, EngineError> {
    validated(&req)?;
    let depth = resolve_depth(&state, None);

    let analysis = state
        .pathfinder
        .find_connection_paths(&req.founder_id, &req.investor_id, depth)?;

    Ok(HttpResponse::Ok().json(OutreachResponse {
        strategy: outreach_strategy(&analysis),
        target: analysis.target,
        reachable: analysis.reachable,
    }))
}

/// GET /api/v1/network/profiles/search?q={query}
async fn search_profiles(state: web::Data<AppState>, query: web::Query<SearchQuery>) -> HttpResponse {
    let profiles: Vec<_> = state
        .pathfinder
        .graph()
        .search(&query.q)
        .into_iter()
        .cloned()
        .collect();

    HttpResponse::Ok().json(ProfileSearchResponse {
        query: query.q.clone(),
        results: profiles.len(),
        profiles,
    })
}

/// GET /api/v1/network/profiles/{id}
async fn get_profile(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, EngineError> {
    let id = id.into_inner();
    let profile = state
        .pathfinder
        .graph()
        .profile(&id)
        .ok_or(EngineError::NotFound(id))?;
    Ok(HttpResponse::Ok().json(profile))
}
