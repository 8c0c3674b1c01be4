//! User settings for the expense ledger
//!
//! Display preferences and the knobs for time-based aggregation. Every field
//! has a default so a partial or missing settings file is fine.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::MonthBucketing;

/// Longest accepted "recent" window (100 years)
pub const MAX_RECENT_WINDOW_DAYS: i64 = 36_500;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Size of the "recent" window in the statistics report, in days
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: i64,

    /// Clock used for monthly buckets
    #[serde(default)]
    pub month_bucketing: MonthBucketing,

    /// Date format for listings (strftime format)
    #[serde(default = "default_list_date_format")]
    pub list_date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_recent_window_days() -> i64 {
    7
}

fn default_list_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            recent_window_days: default_recent_window_days(),
            month_bucketing: MonthBucketing::default(),
            list_date_format: default_list_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if !(1..=MAX_RECENT_WINDOW_DAYS).contains(&settings.recent_window_days) {
                return Err(LedgerError::Config(format!(
                    "recent_window_days must be between 1 and {} (got {})",
                    MAX_RECENT_WINDOW_DAYS, settings.recent_window_days
                )));
            }

            if StrftimeItems::new(&settings.list_date_format).any(|i| matches!(i, Item::Error)) {
                return Err(LedgerError::Config(format!(
                    "Invalid list_date_format: '{}'",
                    settings.list_date_format
                )));
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        std::fs::create_dir_all(paths.base_dir())
            .map_err(|e| LedgerError::Io(format!("Failed to create directory: {}", e)))?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            LedgerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
