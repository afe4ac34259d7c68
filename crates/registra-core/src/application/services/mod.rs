//! Application services - use case orchestrators.

mod catalog_service;
mod intake_service;

pub use catalog_service::{CatalogService, EntityTypeInfo};
pub use intake_service::{IntakeReport, IntakeService, StepOutcome};
