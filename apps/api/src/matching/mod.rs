// Job matching core: skill extraction, match scoring, ranking, location formatting.
// Pure over its inputs; the only nondeterminism is the scorer's injected RNG.

pub mod listing;
pub mod location;
pub mod ranking;
pub mod scoring;
pub mod skills;

use crate::matching::listing::{JobListing, ScoredJob};
use crate::matching::ranking::rank;
use crate::matching::scoring::{match_label, MatchScorer};
use crate::matching::skills::display_skills;

/// Scores every listing against the user's skills, attaches detected skills, and
/// returns the batch ranked by score.
pub fn score_and_rank<S: AsRef<str>>(
    listings: Vec<JobListing>,
    user_skills: &[String],
    scorer: &dyn MatchScorer,
    vocabulary: &[S],
    skill_cap: usize,
) -> Vec<ScoredJob> {
    let scored = listings
        .into_iter()
        .map(|listing| {
            let match_score = scorer.score(user_skills, listing.description_text());
            let skills = display_skills(listing.description_text(), vocabulary, skill_cap);
            ScoredJob {
                listing,
                match_score,
                match_label: match_label(match_score).to_string(),
                skills,
            }
        })
        .collect();

    rank(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scoring::{parse_user_skills, KeywordMatchScorer, MAX_SCORE};
    use crate::matching::skills::{DEFAULT_SKILL_CAP, DEFAULT_VOCABULARY, PLACEHOLDER_SKILL};
    use crate::provider::{Platform, RawListing};

    fn listing(id: &str, description: &str) -> JobListing {
        JobListing::from_raw(
            RawListing {
                job_id: Some(id.to_string()),
                job_description: Some(description.to_string()),
                ..RawListing::default()
            },
            Platform::JSearch,
        )
    }

    fn batch() -> Vec<JobListing> {
        vec![
            listing("none", "Warehouse associate, forklift certified"),
            listing("react", "Frontend role using React daily"),
            listing("both", "React + TypeScript product engineer"),
            listing("ts", "Backend TypeScript services"),
        ]
    }

    #[test]
    fn test_end_to_end_ranking() {
        let user_skills = parse_user_skills("react, typescript");

        for seed in 0..20 {
            let scorer = KeywordMatchScorer::from_seed(seed);
            let ranked = score_and_rank(
                batch(),
                &user_skills,
                &scorer,
                DEFAULT_VOCABULARY,
                DEFAULT_SKILL_CAP,
            );

            assert_eq!(ranked.len(), 4);
            assert!(ranked
                .windows(2)
                .all(|w| w[0].match_score >= w[1].match_score));
            assert_eq!(ranked[0].listing.id, "both");
            assert_eq!(ranked[0].match_score, MAX_SCORE);
            assert_eq!(ranked[0].skills, vec!["React", "TypeScript"]);
            assert_eq!(ranked[3].listing.id, "none");
        }
    }

    #[test]
    fn test_unmatched_description_gets_placeholder_skill() {
        let scorer = KeywordMatchScorer::from_seed(3);
        let ranked = score_and_rank(
            vec![listing("none", "Warehouse associate")],
            &[],
            &scorer,
            DEFAULT_VOCABULARY,
            DEFAULT_SKILL_CAP,
        );
        assert_eq!(ranked[0].skills, vec![PLACEHOLDER_SKILL]);
        assert!((50..=MAX_SCORE).contains(&ranked[0].match_score));
        assert_eq!(ranked[0].match_label, match_label(ranked[0].match_score));
    }

    #[test]
    fn test_missing_description_matches_nothing() {
        let scorer = KeywordMatchScorer::from_seed(4);
        let no_description = JobListing::from_raw(RawListing::default(), Platform::JSearch);
        let user_skills = parse_user_skills("available, description");

        let ranked = score_and_rank(
            vec![no_description],
            &user_skills,
            &scorer,
            &["Available"],
            DEFAULT_SKILL_CAP,
        );
        assert!(ranked[0].match_score < 20, "score was {}", ranked[0].match_score);
        assert_eq!(ranked[0].skills, vec![PLACEHOLDER_SKILL]);
    }

    #[test]
    fn test_empty_batch() {
        let scorer = KeywordMatchScorer::from_seed(0);
        let ranked = score_and_rank(vec![], &[], &scorer, DEFAULT_VOCABULARY, DEFAULT_SKILL_CAP);
        assert!(ranked.is_empty());
    }
}
