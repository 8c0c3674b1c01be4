//! Expense model
//!
//! An expense is immutable once built: id, description, amount, category and
//! timestamp are fixed at construction and only exposed through accessors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;
use super::period::MonthBucketing;

/// Largest amount a single expense may carry ($1,000,000,000.00)
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

/// A single recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    id: ExpenseId,
    description: String,
    amount: Money,
    category: Category,
    date: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense stamped with the current time
    ///
    /// The description is trimmed; nothing else is checked here. Call
    /// [`Expense::validate`] before handing user input to the store.
    pub fn new(description: impl AsRef<str>, amount: Money, category: Category) -> Self {
        Self::new_at(description, amount, category, Utc::now())
    }

    /// Create a new expense stamped with an explicit instant
    pub fn new_at(
        description: impl AsRef<str>,
        amount: Money,
        category: Category,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.as_ref().trim().to_string(),
            amount,
            category,
            date,
        }
    }

    pub fn id(&self) -> ExpenseId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// When the expense was recorded
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// The "YYYY-MM" bucket this expense belongs to
    pub fn month_key(&self, bucketing: MonthBucketing) -> String {
        bucketing.month_key(&self.date)
    }

    /// Case-insensitive substring match on description or category name
    ///
    /// `needle` must already be lowercase.
    pub fn matches_keyword(&self, needle: &str) -> bool {
        self.description.to_lowercase().contains(needle)
            || self.category.as_str().to_lowercase().contains(needle)
    }

    /// Field-wise equality, including the timestamp
    pub fn same_fields(&self, other: &Expense) -> bool {
        self.id == other.id
            && self.description == other.description
            && self.amount == other.amount
            && self.category == other.category
            && self.date == other.date
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount > MAX_AMOUNT {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        Ok(())
    }
}

impl PartialEq for Expense {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Expense {}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.id.short(),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount must not exceed {} (got {})", MAX_AMOUNT, amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
