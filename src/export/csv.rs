//! CSV export
//!
//! One header line, then one line per expense. The description is the only
//! quoted field; ids and category names never contain commas.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;

/// Header line of every export
pub const CSV_HEADER: &str = "ID,Description,Amount,Category,Date";

/// Local wall-clock format of the Date column
pub const CSV_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Write expenses as CSV, returning the number of records written
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> LedgerResult<usize> {
    write!(writer, "{}{}", CSV_HEADER, LINE_ENDING)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for expense in expenses {
        write!(
            writer,
            "{},{},{},{},{}{}",
            expense.id(),
            quote_field(expense.description()),
            expense.amount().to_decimal_string(),
            expense.category(),
            expense.date().with_timezone(&Local).format(CSV_DATE_FORMAT),
            LINE_ENDING
        )
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    Ok(expenses.len())
}

/// Create `path` and write expenses to it as CSV
pub fn export_expenses_csv(expenses: &[Expense], path: &Path) -> LedgerResult<usize> {
    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    let count = write_expenses_csv(expenses, &mut writer)?;
    writer.flush().map_err(|e| {
        LedgerError::Export(format!("Failed to write {}: {}", path.display(), e))
    })?;

    Ok(count)
}

/// Wrap in double quotes, doubling embedded quotes
fn quote_field(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
