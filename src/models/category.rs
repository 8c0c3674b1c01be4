//! Expense categories
//!
//! The category set is closed. Anything that is not one of the known labels
//! collapses to `Other`, both on input and when reading persisted data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label classifying an expense
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Category; 6] = [
        Self::Food,
        Self::Transport,
        Self::Shopping,
        Self::Entertainment,
        Self::Bills,
        Self::Other,
    ];

    /// Map a 1-based menu choice to a category; out-of-range choices are `Other`
    pub fn from_choice(choice: usize) -> Self {
        choice
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).copied())
            .unwrap_or(Self::Other)
    }

    /// Resolve a name (case-insensitive) or menu number 1-6
    pub fn lookup(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(choice) = input.parse::<usize>() {
            return choice.checked_sub(1).and_then(|idx| Self::ALL.get(idx).copied());
        }
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(input))
    }

    /// Like [`Category::lookup`], falling back to `Other`
    pub fn parse_lossy(input: &str) -> Self {
        Self::lookup(input).unwrap_or(Self::Other)
    }

    /// Get the display name for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
