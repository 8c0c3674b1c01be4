//! Configuration module for the expense ledger
//!
//! This module provides:
//! - Path resolution for the ledger and settings files
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
