//! CLI commands for reports
//!
//! Spending by category and the statistics summary.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::expense::format_expense_table;
use crate::display::report::{format_spending_report, format_statistics};
use crate::error::LedgerResult;
use crate::models::Category;
use crate::reports::{SpendingReport, StatisticsReport};
use crate::services::ExpenseService;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Spending per category, optionally with the expenses of one category
    #[command(alias = "categories")]
    Category {
        /// Show the expenses recorded under this category
        name: Option<String>,
    },
    /// Totals, averages, monthly breakdown and top categories
    #[command(alias = "statistics")]
    Stats,
}

/// Handle report commands
pub fn handle_report_command(
    service: &ExpenseService,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Category { name } => {
            let report = SpendingReport::generate(service);
            print!("{}", format_spending_report(&report, symbol));

            if let Some(name) = name {
                println!();
                let Some(category) = Category::lookup(&name) else {
                    println!("No category named '{}'.", name.trim());
                    return Ok(());
                };

                let groups = service.expenses_by_category();
                println!("{} expenses:", category);
                match groups.get(&category) {
                    Some(expenses) => print!(
                        "{}",
                        format_expense_table(expenses, symbol, &settings.list_date_format)
                    ),
                    None => println!("No expenses in {}.", category),
                }
            }
        }

        ReportCommands::Stats => {
            let stats = StatisticsReport::generate(service, settings.recent_window_days);
            print!("{}", format_statistics(&stats, symbol));
        }
    }

    Ok(())
}
