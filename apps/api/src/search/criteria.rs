use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::scoring::parse_user_skills;

/// One search submission. Consumed by a single search, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub role: String,
    pub location: String,
    /// Comma-separated skills as typed by the user. May be blank.
    #[serde(default)]
    pub skills: String,
    /// Name of an uploaded resume. Accepted but not used for scoring.
    #[serde(default)]
    pub resume_name: Option<String>,
}

impl SearchCriteria {
    /// Role and location are required; skills are optional.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.role.trim().is_empty() {
            return Err(AppError::Validation("role cannot be empty".to_string()));
        }
        if self.location.trim().is_empty() {
            return Err(AppError::Validation("location cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Normalized skills used for scoring.
    pub fn user_skills(&self) -> Vec<String> {
        parse_user_skills(&self.skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(role: &str, location: &str, skills: &str) -> SearchCriteria {
        SearchCriteria {
            role: role.to_string(),
            location: location.to_string(),
            skills: skills.to_string(),
            resume_name: None,
        }
    }

    #[test]
    fn test_valid_criteria() {
        assert!(criteria("Software Engineer", "Remote", "").validate().is_ok());
    }

    #[test]
    fn test_blank_role_rejected() {
        let err = criteria("  ", "Remote", "react").validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("role")));
    }

    #[test]
    fn test_blank_location_rejected() {
        let err = criteria("Dev", "", "react").validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("location")));
    }

    #[test]
    fn test_user_skills_are_normalized() {
        assert_eq!(
            criteria("Dev", "Remote", "React, TypeScript,").user_skills(),
            vec!["react".to_string(), "typescript".to_string()]
        );
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let c: SearchCriteria =
            serde_json::from_str(r#"{"role": "Dev", "location": "Remote"}"#).unwrap();
        assert!(c.skills.is_empty());
        assert!(c.resume_name.is_none());
    }
}
