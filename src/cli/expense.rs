//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing, searching and deleting
//! expenses. Input is validated here before it reaches the store.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::expense::{format_expense_details, format_expense_table};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Expense, Money, SHORT_ID_LEN};
use crate::services::ExpenseService;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category name or number: 1 Food, 2 Transport, 3 Shopping,
        /// 4 Entertainment, 5 Bills, 6 Other (unknown values become Other)
        #[arg(short, long, default_value = "Other")]
        category: String,
    },
    /// List all expenses in the order they were recorded
    #[command(alias = "ls")]
    List,
    /// Find expenses by description or category (case-insensitive)
    Search {
        /// Text to look for
        keyword: String,
    },
    /// Delete an expense by its short ID (first 6 characters) or full ID
    #[command(alias = "rm")]
    Delete {
        /// ID prefix, at least 6 characters
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle expense commands
pub fn handle_expense_command(
    service: &mut ExpenseService,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                LedgerError::Validation(format!(
                    "Invalid amount: '{}'. Use a number like '12.50'. Error: {}",
                    amount, e
                ))
            })?;
            let category = Category::parse_lossy(&category);

            let expense = Expense::new_at(&description, amount, category, service.now());
            expense
                .validate()
                .map_err(|e| LedgerError::Validation(e.to_string()))?;

            service.add(expense.clone());
            println!(
                "Added expense {}: {} - {} ({})",
                expense.id().short(),
                expense.description(),
                expense.amount().format_with_symbol(symbol),
                expense.category()
            );
        }

        ExpenseCommands::List => {
            print!(
                "{}",
                format_expense_table(service.expenses(), symbol, &settings.list_date_format)
            );
        }

        ExpenseCommands::Search { keyword } => {
            let keyword = keyword.trim();
            if keyword.is_empty() {
                return Err(LedgerError::Validation(
                    "Search keyword cannot be empty".into(),
                ));
            }

            let results = service.search(keyword);
            if results.is_empty() {
                println!("No expenses match '{}'.", keyword);
            } else {
                println!("Found {} expense(s) matching '{}':", results.len(), keyword);
                print!(
                    "{}",
                    format_expense_table(&results, symbol, &settings.list_date_format)
                );
            }
        }

        ExpenseCommands::Delete { id, force } => {
            let id = id.trim();
            if id.chars().count() < SHORT_ID_LEN {
                return Err(LedgerError::Validation(format!(
                    "ID must be at least {} characters",
                    SHORT_ID_LEN
                )));
            }

            let expense = service
                .find_by_prefix(id)
                .ok_or_else(|| LedgerError::expense_not_found(id))?;

            if !force {
                println!("About to delete expense:");
                print!("{}", format_expense_details(&expense, symbol));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            if !service.delete(expense.id()) {
                return Err(LedgerError::expense_not_found(id));
            }
            println!(
                "Deleted expense {}: {} ({})",
                expense.id().short(),
                expense.description(),
                expense.amount().format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_service() -> (TempDir, ExpenseService) {
        let temp_dir = TempDir::new().unwrap();
        let service = ExpenseService::open(temp_dir.path().join("expenses.dat"));
        (temp_dir, service)
    }

    fn add(description: &str, amount: &str, category: &str) -> ExpenseCommands {
        ExpenseCommands::Add {
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
        }
    }

    #[test]
    fn test_add_maps_category() {
        let (_temp_dir, mut service) = create_test_service();
        let settings = Settings::default();

        handle_expense_command(&mut service, &settings, add("Lunch", "12.50", "1")).unwrap();
        handle_expense_command(&mut service, &settings, add("Flight", "300", "Travel")).unwrap();

        let all = service.list_all();
        assert_eq!(all[0].category(), Category::Food);
        assert_eq!(all[0].amount(), Money::from_cents(1250));
        assert_eq!(all[1].category(), Category::Other);
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let (_temp_dir, mut service) = create_test_service();
        let settings = Settings::default();

        for cmd in [
            add("   ", "5", "Food"),
            add("Lunch", "0", "Food"),
            add("Lunch", "-3", "Food"),
            add("Lunch", "abc", "Food"),
        ] {
            let err = handle_expense_command(&mut service, &settings, cmd).unwrap_err();
            assert!(err.is_validation());
        }
        assert!(service.is_empty());
    }

    #[test]
    fn test_search_rejects_empty_keyword() {
        let (_temp_dir, mut service) = create_test_service();
        let err = handle_expense_command(
            &mut service,
            &Settings::default(),
            ExpenseCommands::Search {
                keyword: "  ".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_delete_requires_prefix_length_and_force() {
        let (_temp_dir, mut service) = create_test_service();
        let settings = Settings::default();
        let expense = service.record("Coffee", Money::from_cents(350), Category::Food);
        let short = expense.id().short();

        let err = handle_expense_command(
            &mut service,
            &settings,
            ExpenseCommands::Delete {
                id: short[..5].to_string(),
                force: true,
            },
        )
        .unwrap_err();
        assert!(err.is_validation());

        handle_expense_command(
            &mut service,
            &settings,
            ExpenseCommands::Delete {
                id: short.clone(),
                force: false,
            },
        )
        .unwrap();
        assert_eq!(service.len(), 1);

        handle_expense_command(
            &mut service,
            &settings,
            ExpenseCommands::Delete {
                id: short.clone(),
                force: true,
            },
        )
        .unwrap();
        assert!(service.is_empty());

        let err = handle_expense_command(
            &mut service,
            &settings,
            ExpenseCommands::Delete { id: short, force: true },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
