//! Registra Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Registra
//! company-registration intake, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           registra-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (IntakeService, CatalogService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: Clock, IntakeSource)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    registra-adapters (Infrastructure)   │
//! │  (SystemClock, FixedClock, FileIntake)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Validators, Verdict, WizardController)│
//! │          No I/O, no clock reads         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use registra_core::prelude::*;
//!
//! # fn run(clock: Box<dyn Clock>) -> RegistraResult<()> {
//! let mut service = IntakeService::new(clock);
//!
//! let company = CompanyIdentity::new()
//!     .with_name("Ahmed Al Saud")
//!     .with_entity_type(EntityType::LimitedLiability)
//!     .with_registration_number("4098765432");
//!
//! let outcome = service.submit_company(&company)?;
//! for (field, message) in outcome.verdict.messages(Locale::English) {
//!     eprintln!("{field}: {message}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, EntityTypeInfo, IntakeReport, IntakeService, StepOutcome,
        ports::{Clock, IntakeSource},
    };
    pub use crate::domain::{
        CompanyIdentity, CompanyIdentityValidator, EntityType, Field, IntakeForm, Locale,
        RepresentativeIdentity, RepresentativeIdentityValidator, Transition, ValidationIssue,
        ValidationVerdict, WizardController, WizardStep,
    };
    pub use crate::error::{RegistraError, RegistraResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
