//! Infrastructure adapters for Registra.
//!
//! This crate implements the ports defined in `registra-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod clock;
pub mod intake_loader;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use intake_loader::{FileIntakeSource, IntakeFormat};
