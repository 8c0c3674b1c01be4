//! Source of the current instant
//!
//! The store asks its clock for "now" when stamping new expenses and when
//! answering time-window queries, so tests can pin the time.

use chrono::{DateTime, Utc};

/// Capability returning the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
