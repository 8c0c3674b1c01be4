//! Expense repository for the ledger file
//!
//! Keeps the ordered sequence of expenses in memory and reads/writes the whole
//! sequence as one versioned JSON document.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Tag identifying a ledger file
pub const LEDGER_FORMAT: &str = "expense-ledger";

/// Current on-disk schema version
pub const LEDGER_SCHEMA_VERSION: u64 = 1;

/// On-disk document layout
#[derive(Serialize)]
struct LedgerFile<'a> {
    format: &'a str,
    schema_version: u64,
    expenses: &'a [Expense],
}

/// Repository for expense persistence, in insertion order
pub struct ExpenseRepository {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl ExpenseRepository {
    /// Create an empty repository backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            expenses: Vec::new(),
        }
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory sequence with the contents of the ledger file
    ///
    /// Returns `Ok(false)` when there is no file. On error the in-memory
    /// sequence is left untouched.
    pub fn load(&mut self) -> LedgerResult<bool> {
        match read_ledger_file(&self.path)? {
            Some(expenses) => {
                self.expenses = expenses;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Write the whole sequence to the ledger file atomically
    pub fn save(&self) -> LedgerResult<()> {
        let file = LedgerFile {
            format: LEDGER_FORMAT,
            schema_version: LEDGER_SCHEMA_VERSION,
            expenses: &self.expenses,
        };
        write_json_atomic(&self.path, &file)
    }

    /// Append an expense at the end of the sequence
    pub fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Remove the expense with the given id
    pub fn remove(&mut self, id: ExpenseId) -> Option<Expense> {
        let idx = self.expenses.iter().position(|e| e.id() == id)?;
        Some(self.expenses.remove(idx))
    }

    /// First expense in insertion order whose id starts with `prefix`
    pub fn find_by_prefix(&self, prefix: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id().matches_prefix(prefix))
    }

    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

/// Read and check a ledger file; `None` when the file does not exist
pub fn read_ledger_file(path: &Path) -> LedgerResult<Option<Vec<Expense>>> {
    let Some(document) = read_json::<Value, _>(path)? else {
        return Ok(None);
    };

    let format = document.get("format").and_then(Value::as_str);
    if format != Some(LEDGER_FORMAT) {
        return Err(LedgerError::Format(format!(
            "{} is not an expense ledger file",
            path.display()
        )));
    }

    let version = document.get("schema_version").and_then(Value::as_u64);
    if version != Some(LEDGER_SCHEMA_VERSION) {
        return Err(LedgerError::Format(format!(
            "{} has unsupported schema version {}",
            path.display(),
            version.map_or_else(|| "(missing)".to_string(), |v| v.to_string())
        )));
    }

    let records = document.get("expenses").cloned().unwrap_or(Value::Null);
    let expenses: Vec<Expense> = serde_json::from_value(records).map_err(|e| {
        LedgerError::Format(format!("{} has malformed records: {}", path.display(), e))
    })?;

    let mut seen = HashSet::with_capacity(expenses.len());
    for expense in &expenses {
        expense.validate().map_err(|e| {
            LedgerError::Format(format!("{}: expense {}: {}", path.display(), expense.id(), e))
        })?;
        if !seen.insert(expense.id()) {
            return Err(LedgerError::Format(format!(
                "{}: duplicate expense id {}",
                path.display(),
                expense.id()
            )));
        }
    }

    Ok(Some(expenses))
}
