//! Onboarding steps: validation of the four profile forms.
//!
//! Each step validates fully before anything is written, so a rejected step leaves
//! the stored profile unchanged.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Number of onboarding steps; completing the last one finishes onboarding.
pub const TOTAL_STEPS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
    Executive,
}

impl ExperienceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
            ExperienceLevel::Executive => "executive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Internship,
    Remote,
}

impl JobType {
    pub fn as_str(self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Freelance => "freelance",
            JobType::Internship => "internship",
            JobType::Remote => "remote",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryRange {
    #[serde(rename = "0-50k")]
    UpTo50k,
    #[serde(rename = "50k-75k")]
    From50kTo75k,
    #[serde(rename = "75k-100k")]
    From75kTo100k,
    #[serde(rename = "100k-150k")]
    From100kTo150k,
    #[serde(rename = "150k-200k")]
    From150kTo200k,
    #[serde(rename = "200k+")]
    Above200k,
}

impl SalaryRange {
    pub fn as_str(self) -> &'static str {
        match self {
            SalaryRange::UpTo50k => "0-50k",
            SalaryRange::From50kTo75k => "50k-75k",
            SalaryRange::From75kTo100k => "75k-100k",
            SalaryRange::From100kTo150k => "100k-150k",
            SalaryRange::From150kTo200k => "150k-200k",
            SalaryRange::Above200k => "200k+",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Step payloads
// ────────────────────────────────────────────────────────────────────────────

/// Step 1: personal details.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonalInfo {
    pub user_id: Uuid,
    pub full_name: String,
    pub age: i32,
    pub location: String,
}

/// Step 2: profession and seniority.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfessionalInfo {
    pub user_id: Uuid,
    pub profession: String,
    pub experience_level: Option<ExperienceLevel>,
}

/// Step 3: skills.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillsInfo {
    pub user_id: Uuid,
    pub skills: Vec<String>,
}

/// Step 4: job preferences. Completing this step finishes onboarding.
#[derive(Debug, Clone, Deserialize)]
pub struct JobPreferences {
    pub user_id: Uuid,
    pub preferred_job_types: Vec<JobType>,
    pub salary_expectation: Option<SalaryRange>,
}

impl PersonalInfo {
    pub fn validate(mut self) -> Result<Self, AppError> {
        self.full_name = self.full_name.trim().to_string();
        self.location = self.location.trim().to_string();
        if self.full_name.is_empty() || self.location.is_empty() || self.age <= 0 {
            return Err(AppError::Validation("Please fill in all fields".to_string()));
        }
        Ok(self)
    }
}

impl ProfessionalInfo {
    /// Returns the trimmed profession and the required experience level.
    pub fn validate(self) -> Result<(Uuid, String, ExperienceLevel), AppError> {
        let profession = self.profession.trim().to_string();
        match self.experience_level {
            Some(level) if !profession.is_empty() => Ok((self.user_id, profession, level)),
            _ => Err(AppError::Validation("Please fill in all fields".to_string())),
        }
    }
}

impl SkillsInfo {
    pub fn validate(mut self) -> Result<Self, AppError> {
        self.skills = normalize_skills(self.skills);
        if self.skills.is_empty() {
            return Err(AppError::Validation(
                "Please select at least one skill".to_string(),
            ));
        }
        Ok(self)
    }
}

impl JobPreferences {
    /// Returns the de-duplicated job types and the required salary range.
    pub fn validate(self) -> Result<(Uuid, Vec<JobType>, SalaryRange), AppError> {
        let mut job_types: Vec<JobType> = Vec::with_capacity(self.preferred_job_types.len());
        for job_type in self.preferred_job_types {
            if !job_types.contains(&job_type) {
                job_types.push(job_type);
            }
        }

        if job_types.is_empty() {
            return Err(AppError::Validation(
                "Please select at least one job type".to_string(),
            ));
        }
        let salary = self.salary_expectation.ok_or_else(|| {
            AppError::Validation("Please select a salary expectation".to_string())
        })?;

        Ok((self.user_id, job_types, salary))
    }
}

/// Trims entries, drops blanks, and drops exact duplicates while keeping order.
pub fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let skill = skill.trim();
        if !skill.is_empty() && !normalized.iter().any(|s| s == skill) {
            normalized.push(skill.to_string());
        }
    }
    normalized
}

/// Step the client should show after `completed`; `None` once onboarding is done.
pub fn next_step(completed: u8) -> Option<u8> {
    (completed < TOTAL_STEPS).then_some(completed + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal(name: &str, age: i32, location: &str) -> PersonalInfo {
        PersonalInfo {
            user_id: Uuid::new_v4(),
            full_name: name.to_string(),
            age,
            location: location.to_string(),
        }
    }

    #[test]
    fn test_personal_info_valid_is_trimmed() {
        let info = personal("  Ada Lovelace ", 36, " London ").validate().unwrap();
        assert_eq!(info.full_name, "Ada Lovelace");
        assert_eq!(info.location, "London");
    }

    #[test]
    fn test_personal_info_requires_all_fields() {
        assert!(personal("", 30, "Paris").validate().is_err());
        assert!(personal("Ada", 0, "Paris").validate().is_err());
        assert!(personal("Ada", 30, "   ").validate().is_err());
    }

    #[test]
    fn test_professional_info_requires_level() {
        let info = ProfessionalInfo {
            user_id: Uuid::new_v4(),
            profession: "Data Scientist".to_string(),
            experience_level: None,
        };
        assert!(info.validate().is_err());
    }

    #[test]
    fn test_professional_info_valid() {
        let info = ProfessionalInfo {
            user_id: Uuid::new_v4(),
            profession: " DevOps Engineer ".to_string(),
            experience_level: Some(ExperienceLevel::Senior),
        };
        let (_, profession, level) = info.validate().unwrap();
        assert_eq!(profession, "DevOps Engineer");
        assert_eq!(level.as_str(), "senior");
    }

    #[test]
    fn test_experience_level_rejects_unknown_value() {
        let result: Result<ProfessionalInfo, _> = serde_json::from_str(&format!(
            r#"{{"user_id": "{}", "profession": "Dev", "experience_level": "wizard"}}"#,
            Uuid::new_v4()
        ));
        assert!(result.is_err());
    }

    #[test]
    fn test_skills_normalized_and_required() {
        let info = SkillsInfo {
            user_id: Uuid::new_v4(),
            skills: vec![
                " React ".to_string(),
                "".to_string(),
                "React".to_string(),
                "SQL".to_string(),
            ],
        }
        .validate()
        .unwrap();
        assert_eq!(info.skills, vec!["React", "SQL"]);

        let empty = SkillsInfo {
            user_id: Uuid::new_v4(),
            skills: vec!["  ".to_string()],
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_job_preferences_serde_names() {
        let prefs: JobPreferences = serde_json::from_str(&format!(
            r#"{{"user_id": "{}", "preferred_job_types": ["full-time", "remote", "full-time"], "salary_expectation": "200k+"}}"#,
            Uuid::new_v4()
        ))
        .unwrap();
        let (_, types, salary) = prefs.validate().unwrap();
        assert_eq!(types, vec![JobType::FullTime, JobType::Remote]);
        assert_eq!(salary, SalaryRange::Above200k);
        assert_eq!(salary.as_str(), "200k+");
    }

    #[test]
    fn test_job_preferences_require_type_and_salary() {
        let no_types = JobPreferences {
            user_id: Uuid::new_v4(),
            preferred_job_types: vec![],
            salary_expectation: Some(SalaryRange::UpTo50k),
        };
        assert!(no_types.validate().is_err());

        let no_salary = JobPreferences {
            user_id: Uuid::new_v4(),
            preferred_job_types: vec![JobType::Contract],
            salary_expectation: None,
        };
        assert!(no_salary.validate().is_err());
    }

    #[test]
    fn test_next_step() {
        assert_eq!(next_step(1), Some(2));
        assert_eq!(next_step(3), Some(4));
        assert_eq!(next_step(4), None);
    }
}
