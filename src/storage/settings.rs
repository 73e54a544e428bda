//! Settings storage
//!
//! Loads and saves user settings as JSON in the data directory.

use crate::planner::preferences::{
    TripPreferences, BUDGET_STEP_INR, MAX_DURATION_DAYS, MIN_BUDGET_INR, MIN_DURATION_DAYS,
};
use crate::storage::{get_data_dir, StorageError};
use crate::types::config::{ChatConfig, ReplyPolicy, DEFAULT_REPLY_DELAY_MS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const MAX_REPLY_DELAY_MS: u64 = 10_000;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Pause before the assistant answers, in milliseconds
    pub reply_delay_ms: u64,
    /// How overlapping replies are scheduled
    pub reply_policy: ReplyPolicy,
    /// Trip length pre-filled on the preference form
    pub default_duration_days: u32,
    /// Budget pre-filled on the preference form
    pub default_budget_inr: u32,
    /// UI theme: "light" or "dark"
    pub theme: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            reply_policy: ReplyPolicy::Independent,
            default_duration_days: 3,
            default_budget_inr: 10_000,
            theme: "light".to_string(),
        }
    }
}

impl AppSettings {
    /// Clamp values into the ranges the UI can represent
    pub fn validate(&mut self) {
        if self.reply_delay_ms > MAX_REPLY_DELAY_MS {
            tracing::warn!(
                "Reply delay {}ms too long, capping to {}ms",
                self.reply_delay_ms,
                MAX_REPLY_DELAY_MS
            );
            self.reply_delay_ms = MAX_REPLY_DELAY_MS;
        }

        self.default_duration_days = self
            .default_duration_days
            .clamp(MIN_DURATION_DAYS, MAX_DURATION_DAYS);

        // Round down to the input's step, never below the minimum
        self.default_budget_inr =
            (self.default_budget_inr / BUDGET_STEP_INR * BUDGET_STEP_INR).max(MIN_BUDGET_INR);

        if self.theme != "light" && self.theme != "dark" {
            self.theme = "light".to_string();
        }
    }

    pub fn chat_config(&self) -> ChatConfig {
        ChatConfig {
            reply_delay: Duration::from_millis(self.reply_delay_ms),
            reply_policy: self.reply_policy,
        }
    }

    /// Blank preference form seeded with the configured defaults
    pub fn initial_preferences(&self) -> TripPreferences {
        TripPreferences::with_defaults(self.default_duration_days, self.default_budget_inr)
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Load and validate settings from a specific file
pub fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!(path = %path.display(), "Loaded settings from disk");
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    save_settings_to(settings, &get_settings_path()?)
}

pub fn save_settings_to(settings: &AppSettings, path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!(path = %path.display(), "Saved settings to disk");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.reply_delay_ms, 1000);
        assert_eq!(settings.reply_policy, ReplyPolicy::Independent);
        assert_eq!(settings.default_duration_days, 3);
        assert_eq!(settings.default_budget_inr, 10_000);
        assert_eq!(settings.theme, "light");
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = AppSettings::default();

        settings.reply_delay_ms = 60_000;
        settings.validate();
        assert_eq!(settings.reply_delay_ms, 10_000);

        settings.default_duration_days = 0;
        settings.validate();
        assert_eq!(settings.default_duration_days, 1);

        settings.default_duration_days = 90;
        settings.validate();
        assert_eq!(settings.default_duration_days, 30);

        settings.default_budget_inr = 12_345;
        settings.validate();
        assert_eq!(settings.default_budget_inr, 12_000);

        settings.default_budget_inr = 10;
        settings.validate();
        assert_eq!(settings.default_budget_inr, 1000);

        settings.theme = "neon".to_string();
        settings.validate();
        assert_eq!(settings.theme, "light");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"reply_policy": "serialized"}"#).unwrap();
        assert_eq!(settings.reply_policy, ReplyPolicy::Serialized);
        assert_eq!(settings.reply_delay_ms, 1000);
        assert_eq!(settings.theme, "light");
    }

    #[test]
    fn test_chat_config() {
        let settings = AppSettings {
            reply_delay_ms: 250,
            reply_policy: ReplyPolicy::Serialized,
            ..AppSettings::default()
        };
        let config = settings.chat_config();
        assert_eq!(config.reply_delay, Duration::from_millis(250));
        assert_eq!(config.reply_policy, ReplyPolicy::Serialized);
    }

    #[test]
    fn test_initial_preferences() {
        let settings = AppSettings {
            default_duration_days: 5,
            default_budget_inr: 25_000,
            ..AppSettings::default()
        };
        let prefs = settings.initial_preferences();
        assert!(prefs.interests.is_empty());
        assert_eq!(prefs.duration_days, 5);
        assert_eq!(prefs.budget_inr, 25_000);
    }

    #[test]
    fn test_settings_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings {
            reply_delay_ms: 400,
            theme: "dark".to_string(),
            ..AppSettings::default()
        };
        save_settings_to(&settings, &path).unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_settings_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_settings_from(&path), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_loaded_values_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"reply_delay_ms": 99999, "theme": "sepia"}"#).unwrap();
        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded.reply_delay_ms, 10_000);
        assert_eq!(loaded.theme, "light");
    }
}
