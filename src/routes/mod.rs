// Route exports
pub mod investors;
pub mod network;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::config::Settings;
use crate::core::{Matcher, PathFinder};
use crate::models::HealthResponse;
use crate::services::{InvestorStore, SocialGraph};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub investors: Arc<InvestorStore>,
    pub matcher: Matcher,
    pub pathfinder: PathFinder,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings, investors: InvestorStore, graph: SocialGraph) -> Self {
        Self {
            matcher: Matcher::new(settings.matching.options()),
            investors: Arc::new(investors),
            pathfinder: PathFinder::new(Arc::new(graph)),
            settings: Arc::new(settings),
        }
    }

    /// State over the built-in sample data with default settings
    pub fn seeded() -> Self {
        Self::new(Settings::default(), InvestorStore::seeded(), SocialGraph::seeded())
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(investors::configure)
            .configure(network::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        investors: state.investors.len(),
        profiles: state.pathfinder.graph().len(),
        timestamp: chrono::Utc::now(),
    })
}
