//! Report formatting utilities for terminal output
//!
//! Renders the spending breakdown and the statistics summary.

use crate::models::Money;
use crate::reports::{SpendingReport, StatisticsReport};

/// Width of the category bar chart, in cells
pub const BAR_WIDTH: usize = 20;

/// Bar chart for a percentage, one cell per `100 / width` percent
pub fn format_bar(percentage: f64, width: usize) -> String {
    let cell = 100.0 / width as f64;
    let filled = ((percentage.max(0.0) / cell) as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), " ".repeat(width - filled))
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Spending per category with share and bar, largest first
pub fn format_spending_report(report: &SpendingReport, symbol: &str) -> String {
    if report.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<15} {:>12} {:>7}  {}\n",
        "Category", "Amount", "Share", "Distribution"
    ));
    output.push_str(&separator(60));
    output.push('\n');

    for row in &report.categories {
        output.push_str(&format!(
            "{:<15} {:>12} {:>6.1}%  {}\n",
            row.category,
            row.total.format_with_symbol(symbol),
            row.percentage,
            format_bar(row.percentage, BAR_WIDTH)
        ));
    }

    output.push_str(&separator(60));
    output.push('\n');
    output.push_str(&format!(
        "{:<15} {:>12}\n",
        "TOTAL",
        report.total.format_with_symbol(symbol)
    ));

    output
}

/// Statistics summary
pub fn format_statistics(stats: &StatisticsReport, symbol: &str) -> String {
    if stats.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let fmt = |m: Money| m.format_with_symbol(symbol);
    let mut output = String::new();

    output.push_str(&format!("Total expenses:   {}\n", stats.count));
    output.push_str(&format!("Total spent:      {}\n", fmt(stats.total)));
    output.push_str(&format!("Average expense:  {}\n", fmt(stats.average)));
    if let Some(min) = &stats.min {
        output.push_str(&format!(
            "Smallest:         {} ({})\n",
            fmt(min.amount()),
            truncate(min.description(), 20)
        ));
    }
    if let Some(max) = &stats.max {
        output.push_str(&format!(
            "Largest:          {} ({})\n",
            fmt(max.amount()),
            truncate(max.description(), 20)
        ));
    }
    output.push_str(&format!(
        "Last {} days:      {} expense(s)\n",
        stats.recent_days, stats.recent_count
    ));

    output.push_str("\nMonthly breakdown\n");
    output.push_str(&separator(30));
    output.push('\n');
    for (month, total) in &stats.monthly {
        output.push_str(&format!("{:<10} {:>14}\n", month, fmt(*total)));
    }

    output.push_str("\nTop categories\n");
    output.push_str(&separator(30));
    output.push('\n');
    for (rank, row) in stats.top_categories.iter().enumerate() {
        output.push_str(&format!(
            "{}. {:<14} {:>12} ({:.1}%)\n",
            rank + 1,
            row.category,
            fmt(row.total),
            row.percentage
        ));
    }

    output
}
