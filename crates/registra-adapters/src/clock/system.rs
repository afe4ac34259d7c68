//! Wall-clock adapter.

use chrono::{Local, NaiveDate};

use registra_core::application::ports::Clock;

/// Production clock: the local calendar date of the machine.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_is_plausible() {
        let today = SystemClock::new().today();
        assert!(today > NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }
}
