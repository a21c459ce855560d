mod config;
mod db;
mod errors;
mod matching;
mod models;
mod profile;
mod provider;
mod routes;
mod search;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::matching::scoring::{KeywordMatchScorer, MatchScorer};
use crate::provider::{JSearchClient, ProviderRegistry};
use crate::routes::build_router;
use crate::search::service::InFlightSearches;
use crate::search::settings::SearchSettings;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (profiles)
    let db = create_pool(&config.database_url).await?;

    // Initialize job providers
    let jsearch = JSearchClient::new(config.jsearch_base_url.clone())
        .context("Failed to build JSearch HTTP client")?;
    let providers = ProviderRegistry::new().with(Arc::new(jsearch));
    info!("JSearch provider initialized ({})", config.jsearch_base_url);

    // Initialize match scorer (seeded when MATCH_SCORE_SEED is set)
    let scorer: Arc<dyn MatchScorer> = Arc::new(KeywordMatchScorer::new(config.match_score_seed));
    info!(
        "Match scorer initialized (backend: {}, seeded: {})",
        scorer.backend(),
        config.match_score_seed.is_some()
    );

    let settings = SearchSettings::new(config.jsearch_api_key.clone(), config.daily_limit);
    if settings.api_key.is_empty() {
        warn!("No JSEARCH_API_KEY set; searches fail until one is saved via /api/v1/settings");
    }

    // Build app state
    let state = AppState {
        db,
        providers: Arc::new(providers),
        scorer,
        settings: Arc::new(RwLock::new(settings)),
        in_flight: InFlightSearches::new(),
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: restrict origins to the web client's domain
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
