//! Export module for the expense ledger
//!
//! CSV is the only export format: spreadsheet-friendly, one row per expense.

pub mod csv;

pub use csv::{export_expenses_csv, write_expenses_csv, CSV_DATE_FORMAT, CSV_HEADER};
