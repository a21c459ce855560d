//! JSearch (RapidAPI) provider.
//!
//! One GET per search: `{base}/search?query={role} in {location}&page=1&num_pages=1`.
//! Failures are returned as-is; the caller decides what the user sees.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::provider::{JobProvider, Platform, ProviderError, RawListing};
use crate::search::criteria::SearchCriteria;
use crate::search::settings::SearchSettings;

pub const DEFAULT_BASE_URL: &str = "https://jsearch.p.rapidapi.com";
const RAPIDAPI_HOST: &str = "jsearch.p.rapidapi.com";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct JSearchResponse {
    #[serde(default)]
    data: Vec<RawListing>,
}

#[derive(Debug, Deserialize)]
struct RapidApiError {
    message: String,
}

#[derive(Clone)]
pub struct JSearchClient {
    client: Client,
    base_url: String,
}

impl JSearchClient {
    pub fn new(base_url: String) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

/// Free-text query sent to JSearch, e.g. `"Software Engineer in Remote"`.
pub fn build_query(criteria: &SearchCriteria) -> String {
    format!("{} in {}", criteria.role.trim(), criteria.location.trim())
}

fn parse_listings(body: &str) -> Result<Vec<RawListing>, ProviderError> {
    let response: JSearchResponse = serde_json::from_str(body)?;
    Ok(response.data)
}

#[async_trait]
impl JobProvider for JSearchClient {
    fn platform(&self) -> Platform {
        Platform::JSearch
    }

    async fn fetch(
        &self,
        criteria: &SearchCriteria,
        settings: &SearchSettings,
    ) -> Result<Vec<RawListing>, ProviderError> {
        if settings.api_key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey(Platform::JSearch));
        }

        let query = build_query(criteria);
        debug!("JSearch query: {query}");

        let response = self
            .client
            .get(self.search_url())
            .header("X-RapidAPI-Key", settings.api_key.trim())
            .header("X-RapidAPI-Host", RAPIDAPI_HOST)
            .query(&[("query", query.as_str()), ("page", "1"), ("num_pages", "1")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("JSearch returned {status}: {body}");
            let message = serde_json::from_str::<RapidApiError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let listings = parse_listings(&body)?;
        debug!("JSearch returned {} listings", listings.len());
        Ok(listings)
    }
}
