//! Match scoring: a pluggable scorer producing the 0-100 "match score" shown on job cards.
//!
//! The score has a deterministic part (`base_score`, substring overlap between the
//! user's skills and the description) and a presentation jitter drawn from an
//! injected random source. Seed the source to make scores reproducible.

use std::sync::Mutex;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Upper bound applied after jitter.
pub const MAX_SCORE: u32 = 98;

/// Baseline range used when the user supplied no skills: 50 + [0, 39].
const EMPTY_SKILLS_FLOOR: u32 = 50;
const EMPTY_SKILLS_SPREAD: u32 = 39;

/// Additive jitter range: [0, 19].
const JITTER_SPREAD: u32 = 19;

/// Splits the comma-separated skills field into lower-cased, trimmed entries.
/// Empty entries are dropped; duplicates are kept.
pub fn parse_user_skills(skills_text: &str) -> Vec<String> {
    skills_text
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Deterministic overlap score: `round(100 * matched / total)`.
///
/// `user_skills` must already be lower-cased (see [`parse_user_skills`]).
/// Returns `None` when there are no skills to match.
pub fn base_score(user_skills: &[String], description: &str) -> Option<u32> {
    if user_skills.is_empty() {
        return None;
    }

    let description_lower = description.to_lowercase();
    let matched = user_skills
        .iter()
        .filter(|skill| description_lower.contains(skill.as_str()))
        .count();

    Some((100.0 * matched as f64 / user_skills.len() as f64).round() as u32)
}

/// Full match score: overlap (or a random baseline for empty skills) plus jitter,
/// capped at [`MAX_SCORE`].
pub fn score_match<R: Rng + ?Sized>(user_skills: &[String], description: &str, rng: &mut R) -> u32 {
    let base = base_score(user_skills, description)
        .unwrap_or_else(|| EMPTY_SKILLS_FLOOR + rng.gen_range(0..=EMPTY_SKILLS_SPREAD));

    (base + rng.gen_range(0..=JITTER_SPREAD)).min(MAX_SCORE)
}

/// Human-readable bucket for a match score.
pub fn match_label(score: u32) -> &'static str {
    if score >= 80 {
        "Excellent Match"
    } else if score >= 60 {
        "Good Match"
    } else if score >= 40 {
        "Fair Match"
    } else {
        "Low Match"
    }
}

/// Scorer abstraction carried in `AppState` as `Arc<dyn MatchScorer>`.
pub trait MatchScorer: Send + Sync {
    fn score(&self, user_skills: &[String], description: &str) -> u32;

    /// Identifies the backend in logs.
    fn backend(&self) -> &'static str;
}

/// Keyword-overlap scorer with a shared, optionally seeded, jitter source.
pub struct KeywordMatchScorer {
    rng: Mutex<StdRng>,
}

impl KeywordMatchScorer {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seeded when `seed` is given, entropy-backed otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }
}

impl MatchScorer for KeywordMatchScorer {
    fn score(&self, user_skills: &[String], description: &str) -> u32 {
        // A poisoned lock only means another scorer call panicked; the RNG is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        score_match(user_skills, description, &mut *rng)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}
