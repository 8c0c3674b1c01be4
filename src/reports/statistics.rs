//! Statistics summary
//!
//! Overall figures for the ledger: count, total, average, extremes, recent
//! activity, the monthly breakdown and the top categories.

use crate::models::{Expense, Money};
use crate::services::ExpenseService;

use super::spending::{SpendingByCategory, SpendingReport};

/// Number of categories listed under top spending
pub const TOP_CATEGORY_COUNT: usize = 3;

/// Ledger statistics
#[derive(Debug, Clone)]
pub struct StatisticsReport {
    pub count: usize,
    pub total: Money,
    /// Mean amount, rounded to the cent
    pub average: Money,
    /// Smallest expense (first in insertion order on ties)
    pub min: Option<Expense>,
    /// Largest expense (first in insertion order on ties)
    pub max: Option<Expense>,
    /// Expenses dated within the recent window
    pub recent_count: usize,
    /// Window used for `recent_count`, in days
    pub recent_days: i64,
    /// ("YYYY-MM", total) sorted by month
    pub monthly: Vec<(String, Money)>,
    /// Largest categories by total
    pub top_categories: Vec<SpendingByCategory>,
}

impl StatisticsReport {
    /// Generate statistics; `recent_days` sets the recent-activity window
    pub fn generate(service: &ExpenseService, recent_days: i64) -> Self {
        let expenses = service.expenses();
        let total = service.total_amount();

        let mut min: Option<&Expense> = None;
        let mut max: Option<&Expense> = None;
        for expense in expenses {
            if min.map_or(true, |m| expense.amount() < m.amount()) {
                min = Some(expense);
            }
            if max.map_or(true, |m| expense.amount() > m.amount()) {
                max = Some(expense);
            }
        }

        let spending = SpendingReport::generate(service);

        Self {
            count: expenses.len(),
            total,
            average: total.average_over(expenses.len()),
            min: min.cloned(),
            max: max.cloned(),
            recent_count: service.recent_count(recent_days),
            recent_days,
            monthly: service.monthly_totals().into_iter().collect(),
            top_categories: spending.top(TOP_CATEGORY_COUNT).to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::Category;
    use chrono::{Duration, TimeZone, Utc};
    use tempfile::TempDir;

    #[test]
    fn test_empty_statistics() {
        let temp_dir = TempDir::new().unwrap();
        let service = ExpenseService::open(temp_dir.path().join("expenses.dat"));

        let stats = StatisticsReport::generate(&service, 7);
        assert!(stats.is_empty());
        assert_eq!(stats.average, Money::zero());
        assert!(stats.min.is_none());
        assert!(stats.max.is_none());
        assert!(stats.monthly.is_empty());
    }

    #[test]
    fn test_statistics() {
        let temp_dir = TempDir::new().unwrap();
        let now = Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
        let mut service =
            ExpenseService::open_with_clock(temp_dir.path().join("expenses.dat"), FixedClock(now));

        let jan = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let feb = Utc.with_ymd_and_hms(2025, 2, 15, 12, 0, 0).unwrap();
        service.add(Expense::new_at("Rent", Money::from_cents(90000), Category::Bills, jan));
        service.add(Expense::new_at("Gum", Money::from_cents(150), Category::Food, feb));
        service.add(Expense::new_at("Mints", Money::from_cents(150), Category::Food, feb));
        service.add(Expense::new_at(
            "Cinema",
            Money::from_cents(1200),
            Category::Entertainment,
            now - Duration::days(2),
        ));
        service.add(Expense::new_at(
            "Jacket",
            Money::from_cents(8500),
            Category::Shopping,
            now - Duration::days(1),
        ));

        let stats = StatisticsReport::generate(&service, 7);
        assert_eq!(stats.count, 5);
        assert_eq!(stats.total, Money::from_cents(100000));
        assert_eq!(stats.average, Money::from_cents(20000));
        assert_eq!(stats.min.as_ref().unwrap().description(), "Gum");
        assert_eq!(stats.max.as_ref().unwrap().description(), "Rent");
        assert_eq!(stats.recent_count, 2);
        assert_eq!(
            stats.monthly,
            vec![
                ("2025-01".to_string(), Money::from_cents(90000)),
                ("2025-02".to_string(), Money::from_cents(300)),
                ("2025-03".to_string(), Money::from_cents(9700)),
            ]
        );

        let top: Vec<Category> = stats.top_categories.iter().map(|c| c.category).collect();
        assert_eq!(top, vec![Category::Bills, Category::Shopping, Category::Entertainment]);
    }
}
