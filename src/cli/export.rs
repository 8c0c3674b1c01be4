//! CLI commands for data export
//!
//! Writes the ledger to a CSV file.

use std::path::PathBuf;

use crate::error::LedgerResult;
use crate::services::ExpenseService;

/// Handle the export command
pub fn handle_export(service: &ExpenseService, output: Option<PathBuf>) -> LedgerResult<()> {
    let path = resolve_export_path(output, service.now().timestamp_millis());
    let count = service.export_csv(&path)?;
    println!("Exported {} expense(s) to: {}", count, path.display());
    Ok(())
}

/// Pick the output file: default name when none given, `.csv` extension enforced
pub fn resolve_export_path(output: Option<PathBuf>, millis: i64) -> PathBuf {
    let path = output
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(format!("expenses_{}.csv", millis)));

    if path.to_string_lossy().ends_with(".csv") {
        path
    } else {
        let mut raw = path.into_os_string();
        raw.push(".csv");
        PathBuf::from(raw)
    }
}
