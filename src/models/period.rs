//! Month bucketing for aggregation
//!
//! Expenses are stamped with a UTC instant. Monthly totals group them by the
//! calendar month the instant falls in, either on the local wall clock or in UTC.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which clock the "YYYY-MM" bucket of an instant is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthBucketing {
    /// Local wall-clock time (default)
    #[default]
    Local,
    /// Coordinated universal time
    Utc,
}

impl MonthBucketing {
    /// The "YYYY-MM" key for an instant
    pub fn month_key(&self, date: &DateTime<Utc>) -> String {
        match self {
            Self::Local => date.with_timezone(&Local).format("%Y-%m").to_string(),
            Self::Utc => date.format("%Y-%m").to_string(),
        }
    }
}

impl fmt::Display for MonthBucketing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Utc => write!(f, "utc"),
        }
    }
}
