//! Job providers. The only place that talks to third-party job-listing APIs.
//!
//! Each platform implements [`JobProvider`]; the matching core never sees
//! provider-specific wire formats beyond [`RawListing`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::search::criteria::SearchCriteria;
use crate::search::settings::SearchSettings;

pub mod jsearch;

pub use jsearch::JSearchClient;

/// Job platforms a user can enable in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    JSearch,
    Indeed,
    LinkedIn,
}

impl Platform {
    /// Label shown on job cards.
    pub fn label(self) -> &'static str {
        match self {
            Platform::JSearch => "JSearch",
            Platform::Indeed => "Indeed",
            Platform::LinkedIn => "LinkedIn",
        }
    }

    /// Whether a provider exists for this platform yet.
    pub fn is_supported(self) -> bool {
        matches!(self, Platform::JSearch)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A listing as received from a provider. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub employer_name: Option<String>,
    #[serde(default)]
    pub job_city: Option<String>,
    #[serde(default)]
    pub job_country: Option<String>,
    #[serde(default)]
    pub job_is_remote: Option<bool>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub job_apply_link: Option<String>,
    #[serde(default)]
    pub job_google_link: Option<String>,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0} API key is not configured")]
    MissingApiKey(Platform),
}

#[async_trait]
pub trait JobProvider: Send + Sync {
    fn platform(&self) -> Platform;

    async fn fetch(
        &self,
        criteria: &SearchCriteria,
        settings: &SearchSettings,
    ) -> Result<Vec<RawListing>, ProviderError>;
}

pub type DynJobProvider = Arc<dyn JobProvider>;

/// Providers keyed by the platform they serve.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<Platform, DynJobProvider>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider, replacing any previous one for the same platform.
    pub fn register(&mut self, provider: DynJobProvider) {
        self.providers.insert(provider.platform(), provider);
    }

    pub fn with(mut self, provider: DynJobProvider) -> Self {
        self.register(provider);
        self
    }

    pub fn get(&self, platform: Platform) -> Option<&DynJobProvider> {
        self.providers.get(&platform)
    }
}
