//! Display-ready job records built from raw provider listings.

use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::matching::location::format_location;
use crate::provider::{Platform, RawListing};

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const NO_DESCRIPTION: &str = "No description available";
const NO_LINK: &str = "#";

/// A listing with every field resolved to a displayable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub platform: String,
    pub link: String,
    /// `None` when the provider sent no usable text; serialized as [`NO_DESCRIPTION`].
    #[serde(serialize_with = "serialize_description")]
    pub description: Option<String>,
}

impl JobListing {
    /// Normalizes a raw listing. Missing or blank fields become placeholders.
    pub fn from_raw(raw: RawListing, platform: Platform) -> Self {
        let location = format_location(
            raw.job_city.as_deref(),
            raw.job_country.as_deref(),
            raw.job_is_remote.unwrap_or(false),
        );

        Self {
            id: non_blank(raw.job_id).unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: non_blank(raw.job_title).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            company: non_blank(raw.employer_name).unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
            location,
            platform: platform.label().to_string(),
            link: non_blank(raw.job_apply_link)
                .or_else(|| non_blank(raw.job_google_link))
                .unwrap_or_else(|| NO_LINK.to_string()),
            description: non_blank(raw.job_description),
        }
    }

    /// Text used for skill detection and scoring. Empty when there is no description.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// A listing plus its match score and detected skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub listing: JobListing,
    pub match_score: u32,
    pub match_label: String,
    pub skills: Vec<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn serialize_description<S: Serializer>(
    description: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(description.as_deref().unwrap_or(NO_DESCRIPTION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_full_record() {
        let raw = RawListing {
            job_id: Some("abc".to_string()),
            job_title: Some("Rust Engineer".to_string()),
            employer_name: Some("Ferrous".to_string()),
            job_city: Some("Austin".to_string()),
            job_country: Some("USA".to_string()),
            job_is_remote: Some(false),
            job_description: Some("Build things".to_string()),
            job_apply_link: Some("https://apply.example.com".to_string()),
            job_google_link: Some("https://google.example.com".to_string()),
        };

        let listing = JobListing::from_raw(raw, Platform::JSearch);
        assert_eq!(listing.id, "abc");
        assert_eq!(listing.title, "Rust Engineer");
        assert_eq!(listing.company, "Ferrous");
        assert_eq!(listing.location, "Austin, USA");
        assert_eq!(listing.platform, "JSearch");
        assert_eq!(listing.link, "https://apply.example.com");
        assert_eq!(listing.description.as_deref(), Some("Build things"));
    }

    #[test]
    fn test_from_raw_empty_record_uses_placeholders() {
        let listing = JobListing::from_raw(RawListing::default(), Platform::JSearch);
        assert!(!listing.id.is_empty());
        assert_eq!(listing.title, UNKNOWN_TITLE);
        assert_eq!(listing.company, UNKNOWN_COMPANY);
        assert_eq!(listing.location, "Location not specified");
        assert_eq!(listing.link, "#");
        assert_eq!(listing.description, None);
        assert_eq!(listing.description_text(), "");
    }

    #[test]
    fn test_from_raw_falls_back_to_google_link() {
        let raw = RawListing {
            job_apply_link: Some("  ".to_string()),
            job_google_link: Some("https://google.example.com/job".to_string()),
            job_is_remote: Some(true),
            ..RawListing::default()
        };
        let listing = JobListing::from_raw(raw, Platform::JSearch);
        assert_eq!(listing.link, "https://google.example.com/job");
        assert_eq!(listing.location, "Remote");
    }

    #[test]
    fn test_scored_job_serializes_flat() {
        let job = ScoredJob {
            listing: JobListing::from_raw(RawListing::default(), Platform::JSearch),
            match_score: 77,
            match_label: "Good Match".to_string(),
            skills: vec!["React".to_string()],
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["title"], "Unknown Title");
        assert_eq!(value["description"], NO_DESCRIPTION);
        assert_eq!(value["match_score"], 77);
        assert_eq!(value["skills"][0], "React");
    }
}
