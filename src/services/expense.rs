//! Expense service
//!
//! The store: owns the ordered sequence of expenses, persists it after every
//! mutation and answers the aggregation queries. Aggregates are computed on
//! demand in a single pass; nothing is cached.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::LedgerResult;
use crate::export::csv::export_expenses_csv;
use crate::models::{Category, Expense, ExpenseId, Money, MonthBucketing};
use crate::storage::ExpenseRepository;

/// Service for expense management
pub struct ExpenseService {
    repo: ExpenseRepository,
    clock: Box<dyn Clock>,
    bucketing: MonthBucketing,
}

impl ExpenseService {
    /// Open the ledger at `path` using the system clock
    ///
    /// A missing, unreadable or unrecognised file never fails construction:
    /// the store starts empty and a warning is logged.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::open_with_clock(path, SystemClock)
    }

    /// Open the ledger at `path` with an explicit clock
    pub fn open_with_clock(path: impl Into<PathBuf>, clock: impl Clock + 'static) -> Self {
        let mut repo = ExpenseRepository::new(path);

        match repo.load() {
            Ok(true) => debug!(
                path = %repo.path().display(),
                count = repo.len(),
                "loaded expenses"
            ),
            Ok(false) => info!(path = %repo.path().display(), "no ledger file, starting empty"),
            Err(e) => warn!("Could not load saved expenses, starting fresh: {}", e),
        }

        Self {
            repo,
            clock: Box::new(clock),
            bucketing: MonthBucketing::default(),
        }
    }

    /// Choose which clock month buckets are read from
    pub fn with_month_bucketing(mut self, bucketing: MonthBucketing) -> Self {
        self.bucketing = bucketing;
        self
    }

    /// Current instant according to the store's clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Build an expense stamped with the store's clock and add it
    pub fn record(
        &mut self,
        description: impl AsRef<str>,
        amount: Money,
        category: Category,
    ) -> Expense {
        let expense = Expense::new_at(description, amount, category, self.now());
        self.add(expense.clone());
        expense
    }

    /// Append an expense and persist
    ///
    /// No validation happens here; callers check [`Expense::validate`] first.
    pub fn add(&mut self, expense: Expense) {
        debug!(id = %expense.id(), "adding expense");
        self.repo.push(expense);
        self.persist();
    }

    /// Remove the expense with exactly this id and persist
    ///
    /// Returns false, without touching the file, when no expense matches.
    pub fn delete(&mut self, id: ExpenseId) -> bool {
        match self.repo.remove(id) {
            Some(_) => {
                debug!(%id, "deleted expense");
                self.persist();
                true
            }
            None => false,
        }
    }

    /// First expense in insertion order whose id starts with `prefix`
    pub fn find_by_prefix(&self, prefix: &str) -> Option<Expense> {
        self.repo.find_by_prefix(prefix).cloned()
    }

    /// Delete the first expense whose id starts with `prefix`
    pub fn delete_by_prefix(&mut self, prefix: &str) -> Option<Expense> {
        let target = self.repo.find_by_prefix(prefix)?.clone();
        self.delete(target.id()).then_some(target)
    }

    /// Snapshot of all expenses in insertion order
    pub fn list_all(&self) -> Vec<Expense> {
        self.repo.as_slice().to_vec()
    }

    /// Borrowed read-only view of all expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        self.repo.as_slice()
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Expenses whose description or category contains `keyword`, ignoring case
    ///
    /// The empty keyword matches everything.
    pub fn search(&self, keyword: &str) -> Vec<Expense> {
        let needle = keyword.to_lowercase();
        self.expenses()
            .iter()
            .filter(|e| e.matches_keyword(&needle))
            .cloned()
            .collect()
    }

    /// Sum of all amounts
    pub fn total_amount(&self) -> Money {
        self.expenses().iter().map(Expense::amount).sum()
    }

    /// Summed amount per category; categories without expenses are absent
    pub fn category_totals(&self) -> BTreeMap<Category, Money> {
        let mut totals = BTreeMap::new();
        for expense in self.expenses() {
            *totals.entry(expense.category()).or_insert_with(Money::zero) += expense.amount();
        }
        totals
    }

    /// Expenses grouped by category, insertion order kept inside each group
    pub fn expenses_by_category(&self) -> BTreeMap<Category, Vec<Expense>> {
        let mut groups: BTreeMap<Category, Vec<Expense>> = BTreeMap::new();
        for expense in self.expenses() {
            groups
                .entry(expense.category())
                .or_default()
                .push(expense.clone());
        }
        groups
    }

    /// Summed amount per "YYYY-MM" month
    pub fn monthly_totals(&self) -> BTreeMap<String, Money> {
        let mut totals = BTreeMap::new();
        for expense in self.expenses() {
            *totals
                .entry(expense.month_key(self.bucketing))
                .or_insert_with(Money::zero) += expense.amount();
        }
        totals
    }

    /// Number of expenses dated strictly after `now - days`
    ///
    /// A window reaching past the earliest representable instant counts
    /// every expense.
    pub fn recent_count(&self, days: i64) -> usize {
        let cutoff = Duration::try_days(days).and_then(|d| self.now().checked_sub_signed(d));
        match cutoff {
            Some(cutoff) => self.expenses().iter().filter(|e| e.date() > cutoff).count(),
            None => self.len(),
        }
    }

    /// Export all expenses to a CSV file, returning the number written
    pub fn export_csv(&self, path: impl AsRef<Path>) -> LedgerResult<usize> {
        let path = path.as_ref();
        let count = export_expenses_csv(self.expenses(), path)?;
        info!(path = %path.display(), count, "exported expenses");
        Ok(count)
    }

    /// Write the current sequence; failures are logged and memory is kept
    fn persist(&self) {
        if let Err(e) = self.repo.save() {
            warn!("Could not save expenses: {}", e);
        }
    }
}
