//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod report;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export, resolve_export_path};
pub use report::{handle_report_command, ReportCommands};
