//! expense-ledger - Terminal-based personal expense ledger
//!
//! This library records expenses, keeps them in a single ledger file across
//! runs, and reports aggregate views: totals by category, by month, and
//! overall statistics. Exports go to CSV.
//!
//! # Architecture
//!
//! - `models`: the expense record, ids, money, categories, month bucketing
//! - `storage`: atomic file I/O and the versioned ledger file
//! - `services`: the expense store (mutations, queries, persistence)
//! - `reports`: spending breakdown and statistics
//! - `export`: CSV export
//! - `clock`: injectable source of "now"
//! - `config`: path resolution and user settings
//! - `cli` / `display`: command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_ledger::models::{Category, Expense, Money};
//! use expense_ledger::services::ExpenseService;
//!
//! let mut ledger = ExpenseService::open("expenses.dat");
//! ledger.add(Expense::new("Lunch", Money::from_cents(1250), Category::Food));
//! assert_eq!(ledger.total_amount().to_decimal_string(), "12.50");
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
