//! Application layer for Registra.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (IntakeService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! intake rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CatalogService,
    EntityTypeInfo, // DTO for catalog display
    IntakeReport,
    IntakeService,
    StepOutcome,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Clock, IntakeSource};

pub use error::ApplicationError;
