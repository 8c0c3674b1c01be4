//! Expense identifiers
//!
//! Ids are random v4 UUIDs. The first six characters of the hyphenated form
//! act as a short handle that users type to refer to an expense.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Number of characters in the user-visible short handle
pub const SHORT_ID_LEN: usize = 6;

/// Unique identifier of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an ID from its full textual form
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// The short handle shown in listings
    pub fn short(&self) -> String {
        self.0.to_string()[..SHORT_ID_LEN].to_string()
    }

    /// Whether the full textual id starts with `prefix` (ASCII case-insensitive)
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let full = self.0.to_string();
        full.len() >= prefix.len() && full[..prefix.len()].eq_ignore_ascii_case(prefix)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
