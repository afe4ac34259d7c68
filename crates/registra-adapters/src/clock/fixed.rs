//! Pinned clock for tests and reproducible runs.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{Days, NaiveDate};
use tracing::debug;

use registra_core::application::ports::Clock;

/// A clock that always reports the date it was given.
///
/// Clones share the same date, so a test can hand one clone to a service
/// and move time with the other.
#[derive(Debug, Clone)]
pub struct FixedClock {
    today: Arc<RwLock<NaiveDate>>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Arc::new(RwLock::new(today)),
        }
    }

    /// Move the clock to `date`.
    pub fn set(&self, date: NaiveDate) {
        let mut today = self.today.write().unwrap_or_else(PoisonError::into_inner);
        debug!(from = %*today, to = %date, "fixed clock moved");
        *today = date;
    }

    /// Move the clock forward by `days`. Saturates at the calendar's end.
    pub fn advance_days(&self, days: u64) {
        let mut today = self.today.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(next) = today.checked_add_days(Days::new(days)) {
            *today = next;
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.read().unwrap_or_else(PoisonError::into_inner)
    }
}
