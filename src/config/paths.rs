//! Path management for the expense ledger
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_LEDGER_DIR` environment variable (if set)
//! 2. The current working directory

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::LedgerError;

/// Environment variable overriding the base directory
pub const LEDGER_DIR_ENV: &str = "EXPENSE_LEDGER_DIR";

/// File name of the persisted ledger
pub const DATA_FILE_NAME: &str = "expenses.dat";

/// File name of the settings file
pub const SETTINGS_FILE_NAME: &str = "ledger.json";

/// Manages all paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Directory holding the ledger and settings files
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the override is unset and the current directory
    /// cannot be determined.
    pub fn new() -> Result<Self, LedgerError> {
        Self::from_override(std::env::var_os(LEDGER_DIR_ENV))
    }

    /// Resolve paths from an optional base directory override; an empty
    /// override counts as unset
    pub fn from_override(custom: Option<OsString>) -> Result<Self, LedgerError> {
        let base_dir = match custom {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => std::env::current_dir().map_err(|e| {
                LedgerError::Config(format!("Could not determine current directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to expenses.dat
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join(DATA_FILE_NAME)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE_NAME)
    }
}
