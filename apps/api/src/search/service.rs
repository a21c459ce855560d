//! Search pipeline (fetch, normalize, score, rank) and per-session
//! cancel-and-replace of in-flight searches.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::AbortHandle;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::matching::listing::{JobListing, ScoredJob};
use crate::matching::scoring::MatchScorer;
use crate::matching::score_and_rank;
use crate::matching::skills::{DEFAULT_SKILL_CAP, DEFAULT_VOCABULARY};
use crate::provider::{ProviderError, ProviderRegistry};
use crate::search::criteria::SearchCriteria;
use crate::search::settings::SearchSettings;

/// Runs one search against every enabled platform and returns the ranked batch.
///
/// All fetches complete before any scoring happens. Any provider failure fails the
/// whole search; there are no partial results and no retries.
pub async fn run_search(
    registry: &ProviderRegistry,
    scorer: &dyn MatchScorer,
    criteria: &SearchCriteria,
    settings: &SearchSettings,
) -> Result<Vec<ScoredJob>, ProviderError> {
    if let Some(resume) = &criteria.resume_name {
        debug!("Resume '{resume}' attached; not used for scoring");
    }

    let mut listings: Vec<JobListing> = Vec::new();

    for &platform in &settings.enabled_platforms {
        let Some(provider) = registry.get(platform) else {
            warn!("No provider registered for {platform}; skipping");
            continue;
        };

        let raw = provider.fetch(criteria, settings).await?;
        info!("{platform} returned {} listings", raw.len());
        listings.extend(raw.into_iter().map(|r| JobListing::from_raw(r, platform)));
    }

    let user_skills = criteria.user_skills();
    debug!(
        "Scoring {} listings against {} skills ({} scorer)",
        listings.len(),
        user_skills.len(),
        scorer.backend()
    );

    Ok(score_and_rank(
        listings,
        &user_skills,
        scorer,
        DEFAULT_VOCABULARY,
        DEFAULT_SKILL_CAP,
    ))
}

type RunningSearches = Arc<Mutex<HashMap<String, (u64, AbortHandle)>>>;

/// Tracks the in-flight search per session. Last submission wins: a new search for
/// a session aborts the one it replaces.
#[derive(Clone, Default)]
pub struct InFlightSearches {
    running: RunningSearches,
    next_ticket: Arc<AtomicU64>,
}

impl InFlightSearches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns `search` and waits for it.
    ///
    /// With a `session_id`, any earlier search for that session is aborted and
    /// resolves to [`AppError::SearchSuperseded`]. Without one, the search is
    /// never superseded. Dropping the returned future (a disconnected client)
    /// aborts the search and releases its session slot.
    pub async fn run<F, T>(&self, session_id: Option<&str>, search: F) -> Result<T, AppError>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let handle = tokio::spawn(search);
        let ticket = self.next_ticket.fetch_add(1, Ordering::Relaxed);

        let _guard = SearchGuard {
            running: self.running.clone(),
            session: session_id.map(str::to_string),
            ticket,
            task: handle.abort_handle(),
        };

        if let Some(session) = session_id {
            let previous = lock(&self.running)
                .insert(session.to_string(), (ticket, handle.abort_handle()));
            if let Some((_, previous)) = previous {
                info!("Superseding in-flight search for session {session}");
                previous.abort();
            }
        }

        match handle.await {
            Ok(value) => Ok(value),
            Err(e) if e.is_cancelled() => Err(AppError::SearchSuperseded),
            Err(e) => Err(AppError::Internal(anyhow::anyhow!("search task failed: {e}"))),
        }
    }

    /// Number of sessions with a search still running.
    #[cfg(test)]
    pub fn active_sessions(&self) -> usize {
        lock(&self.running).len()
    }
}

/// Releases a search's session slot when its waiter goes away, whether the search
/// finished or the waiting request was dropped.
struct SearchGuard {
    running: RunningSearches,
    session: Option<String>,
    ticket: u64,
    task: AbortHandle,
}

impl Drop for SearchGuard {
    fn drop(&mut self) {
        // No-op for a task that already finished.
        self.task.abort();

        if let Some(session) = &self.session {
            let mut running = lock(&self.running);
            if running.get(session).is_some_and(|(t, _)| *t == self.ticket) {
                running.remove(session);
            }
        }
    }
}

fn lock(
    running: &RunningSearches,
) -> std::sync::MutexGuard<'_, HashMap<String, (u64, AbortHandle)>> {
    running.lock().unwrap_or_else(|e| e.into_inner())
}
