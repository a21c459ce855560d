//! Search settings: provider credential, advisory daily limit, enabled platforms.
//!
//! Settings are an explicit value. Each search takes a snapshot before fetching and
//! never writes back.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::provider::Platform;

pub const DEFAULT_DAILY_LIMIT: u32 = 10;
pub const MIN_DAILY_LIMIT: u32 = 1;
pub const MAX_DAILY_LIMIT: u32 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    pub api_key: String,
    /// Maximum applications per day. Advisory only; nothing enforces it.
    pub daily_limit: u32,
    pub enabled_platforms: BTreeSet<Platform>,
}

impl SearchSettings {
    pub fn new(api_key: String, daily_limit: u32) -> Self {
        Self {
            api_key,
            daily_limit,
            enabled_platforms: BTreeSet::from([Platform::JSearch]),
        }
    }

    /// Client-facing view. The API key itself is never echoed back.
    pub fn view(&self) -> SettingsView {
        SettingsView {
            has_api_key: !self.api_key.trim().is_empty(),
            daily_limit: self.daily_limit,
            enabled_platforms: self.enabled_platforms.iter().copied().collect(),
        }
    }

    /// Applies an update, validating it first. On error `self` is left untouched.
    pub fn apply(&mut self, update: SettingsUpdate) -> Result<(), AppError> {
        let validated = self.validated(update)?;
        *self = validated;
        Ok(())
    }

    fn validated(&self, update: SettingsUpdate) -> Result<SearchSettings, AppError> {
        if !(MIN_DAILY_LIMIT..=MAX_DAILY_LIMIT).contains(&update.daily_limit) {
            return Err(AppError::Validation(format!(
                "daily_limit must be between {MIN_DAILY_LIMIT} and {MAX_DAILY_LIMIT}"
            )));
        }

        if let Some(platform) = update.enabled_platforms.iter().find(|p| !p.is_supported()) {
            return Err(AppError::Validation(format!("{platform} is coming soon")));
        }

        Ok(SearchSettings {
            api_key: update
                .api_key
                .map(|k| k.trim().to_string())
                .unwrap_or_else(|| self.api_key.clone()),
            daily_limit: update.daily_limit,
            enabled_platforms: update.enabled_platforms.into_iter().collect(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsView {
    pub has_api_key: bool,
    pub daily_limit: u32,
    pub enabled_platforms: Vec<Platform>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SettingsUpdate {
    /// `None` keeps the current key.
    #[serde(default)]
    pub api_key: Option<String>,
    pub daily_limit: u32,
    pub enabled_platforms: Vec<Platform>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(api_key: Option<&str>, daily_limit: u32, platforms: &[Platform]) -> SettingsUpdate {
        SettingsUpdate {
            api_key: api_key.map(str::to_string),
            daily_limit,
            enabled_platforms: platforms.to_vec(),
        }
    }

    #[test]
    fn test_defaults() {
        let settings = SearchSettings::new(String::new(), DEFAULT_DAILY_LIMIT);
        let view = settings.view();
        assert!(!view.has_api_key);
        assert_eq!(view.daily_limit, 10);
        assert_eq!(view.enabled_platforms, vec![Platform::JSearch]);
    }

    #[test]
    fn test_apply_valid_update() {
        let mut settings = SearchSettings::new(String::new(), DEFAULT_DAILY_LIMIT);
        settings
            .apply(update(Some(" key-123 "), 25, &[Platform::JSearch]))
            .unwrap();
        assert_eq!(settings.api_key, "key-123");
        assert_eq!(settings.daily_limit, 25);
        assert!(settings.view().has_api_key);
    }

    #[test]
    fn test_missing_api_key_keeps_existing() {
        let mut settings = SearchSettings::new("secret".to_string(), DEFAULT_DAILY_LIMIT);
        settings.apply(update(None, 5, &[Platform::JSearch])).unwrap();
        assert_eq!(settings.api_key, "secret");
        assert_eq!(settings.daily_limit, 5);
    }

    #[test]
    fn test_daily_limit_bounds() {
        let mut settings = SearchSettings::new(String::new(), DEFAULT_DAILY_LIMIT);
        assert!(settings.apply(update(None, 0, &[])).is_err());
        assert!(settings.apply(update(None, 51, &[])).is_err());
        assert!(settings.apply(update(None, 1, &[])).is_ok());
        assert!(settings.apply(update(None, 50, &[])).is_ok());
    }

    #[test]
    fn test_unsupported_platform_rejected_without_change() {
        let mut settings = SearchSettings::new("secret".to_string(), DEFAULT_DAILY_LIMIT);
        let before = settings.clone();
        let err = settings
            .apply(update(Some("other"), 20, &[Platform::JSearch, Platform::LinkedIn]))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "LinkedIn is coming soon"));
        assert_eq!(settings, before);
    }

    #[test]
    fn test_view_never_contains_key() {
        let settings = SearchSettings::new("super-secret".to_string(), DEFAULT_DAILY_LIMIT);
        let json = serde_json::to_string(&settings.view()).unwrap();
        assert!(!json.contains("super-secret"));
    }
}
