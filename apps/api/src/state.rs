use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::matching::scoring::MatchScorer;
use crate::provider::ProviderRegistry;
use crate::search::service::InFlightSearches;
use crate::search::settings::SearchSettings;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub providers: Arc<ProviderRegistry>,
    /// Pluggable match scorer. Default: KeywordMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
    /// Current search settings. Searches read a snapshot; only the settings API writes.
    pub settings: Arc<RwLock<SearchSettings>>,
    pub in_flight: InFlightSearches,
}
