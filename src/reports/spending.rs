//! Spending Report
//!
//! Breaks spending down by category, largest share first.

use crate::models::{Category, Money};
use crate::services::ExpenseService;

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingByCategory {
    pub category: Category,
    /// Total spending in this category
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Percentage of overall spending
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingReport {
    /// Categories with spending, sorted by total descending
    pub categories: Vec<SpendingByCategory>,
    /// Total spending across all categories
    pub total: Money,
}

impl SpendingReport {
    /// Generate a spending report from the store
    pub fn generate(service: &ExpenseService) -> Self {
        let total = service.total_amount();

        let mut categories: Vec<SpendingByCategory> = service
            .expenses_by_category()
            .into_iter()
            .map(|(category, expenses)| {
                let spent: Money = expenses.iter().map(|e| e.amount()).sum();
                SpendingByCategory {
                    category,
                    total: spent,
                    count: expenses.len(),
                    percentage: spent.percentage_of(total),
                }
            })
            .collect();

        // Stable sort keeps category order for equal totals
        categories.sort_by(|a, b| b.total.cmp(&a.total));

        Self { categories, total }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The `n` largest categories
    pub fn top(&self, n: usize) -> &[SpendingByCategory] {
        &self.categories[..n.min(self.categories.len())]
    }
}
