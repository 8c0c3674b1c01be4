//! Reports module for the expense ledger
//!
//! Provides the spending-by-category breakdown and the overall statistics
//! summary.

pub mod spending;
pub mod statistics;

pub use spending::{SpendingByCategory, SpendingReport};
pub use statistics::{StatisticsReport, TOP_CATEGORY_COUNT};
