//! Expense display formatting
//!
//! Table views used by the list, search and category commands.

use chrono::Local;

use crate::models::{Expense, Money};

use super::report::{separator, truncate};

/// Maximum description width in tables
const DESCRIPTION_WIDTH: usize = 23;

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense, symbol: &str, date_format: &str) -> String {
    format!(
        "{:<8} {:<23} {:>12} {:<14} {}",
        expense.id().short(),
        truncate(expense.description(), DESCRIPTION_WIDTH),
        expense.amount().format_with_symbol(symbol),
        expense.category(),
        expense.date().with_timezone(&Local).format(date_format)
    )
}

/// Format expenses as a table with a total line
pub fn format_expense_table(expenses: &[Expense], symbol: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8} {:<23} {:>12} {:<14} {}\n",
        "ID", "Description", "Amount", "Category", "Date"
    ));
    output.push_str(&separator(78));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, symbol, date_format));
        output.push('\n');
    }

    let total: Money = expenses.iter().map(Expense::amount).sum();
    output.push_str(&separator(78));
    output.push('\n');
    output.push_str(&format!(
        "{} expense(s), total {}\n",
        expenses.len(),
        total.format_with_symbol(symbol)
    ));

    output
}

/// Format expense details for confirmation prompts
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id()));
    output.push_str(&format!("Description: {}\n", expense.description()));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount().format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category()));
    output.push_str(&format!(
        "Date:        {}\n",
        expense.date().with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
    ));

    output
}
