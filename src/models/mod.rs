//! Core data models for the expense ledger
//!
//! This module contains the record model: expenses, their ids, amounts,
//! categories and month bucketing.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;

pub use category::Category;
pub use expense::{Expense, ExpenseValidationError, MAX_AMOUNT};
pub use ids::{ExpenseId, SHORT_ID_LEN};
pub use money::{Money, MoneyParseError};
pub use period::MonthBucketing;
