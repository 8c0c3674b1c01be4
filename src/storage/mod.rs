//! Storage layer for the expense ledger
//!
//! Provides the versioned ledger file with atomic writes and automatic
//! directory creation.

pub mod expenses;
pub mod file_io;

pub use expenses::{read_ledger_file, ExpenseRepository, LEDGER_FORMAT, LEDGER_SCHEMA_VERSION};
pub use file_io::{read_json, write_json_atomic};
