use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use deepflow_match::config::Settings;
use deepflow_match::error::{handle_json_payload_error, handle_query_payload_error};
use deepflow_match::routes::{self, AppState};
use deepflow_match::services::{DataError, InvestorStore, SocialGraph};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn load_datasets(settings: &Settings) -> Result<(InvestorStore, SocialGraph), DataError> {
    let investors = match &settings.data.investors_path {
        Some(path) => {
            info!("Loading investors from {}", path);
            InvestorStore::from_json_file(path)?
        }
        None => InvestorStore::seeded(),
    };

    let graph = match &settings.data.network_path {
        Some(path) => {
            info!("Loading network from {}", path);
            SocialGraph::from_json_file(path)?
        }
        None => SocialGraph::seeded(),
    };

    Ok((investors, graph))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Deepflow matching service...");

    let (investors, graph) = match load_datasets(&settings) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load data: {}", e);
            std::process::exit(1);
        }
    };

    info!("Loaded {} investors and {} network profiles", investors.len(), graph.len());

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    let app_state = AppState::new(settings, investors, graph);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
