use crate::matching::listing::ScoredJob;

/// Orders jobs by `match_score`, highest first.
///
/// The sort is stable: jobs with equal scores keep their input order, which makes
/// ranking idempotent.
pub fn rank(mut jobs: Vec<ScoredJob>) -> Vec<ScoredJob> {
    jobs.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    jobs
}
