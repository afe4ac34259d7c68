//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `registra-adapters` crate provides implementations.

use chrono::NaiveDate;

use crate::domain::IntakeForm;
use crate::error::RegistraResult;

/// Port for the current calendar date.
///
/// Implemented by:
/// - `registra_adapters::clock::SystemClock` (production)
/// - `registra_adapters::clock::FixedClock` (testing, pinned runs)
///
/// Age-of-majority checks read "today" only through this port, so a run can
/// be made deterministic by swapping the adapter.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// The current date in the jurisdiction's calendar.
    fn today(&self) -> NaiveDate;
}

/// Port for reading a complete intake snapshot.
///
/// Implemented by:
/// - `registra_adapters::FileIntakeSource` (TOML / JSON files)
pub trait IntakeSource: Send + Sync {
    /// Load the snapshot.
    ///
    /// Field values are returned as entered; rejecting them is the
    /// validators' job. Only unreadable sources and values outside the
    /// catalog are errors.
    fn load(&self) -> RegistraResult<IntakeForm>;

    /// Human-readable description of where the snapshot comes from.
    fn describe(&self) -> String;
}
