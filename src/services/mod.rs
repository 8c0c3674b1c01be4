//! Service layer for the expense ledger
//!
//! The service layer sits on top of the storage layer: it owns the expense
//! sequence, keeps the ledger file in step with it and computes aggregates.

pub mod expense;

pub use expense::ExpenseService;
