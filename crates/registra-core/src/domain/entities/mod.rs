pub mod company;
pub mod intake_form;
pub mod representative;
pub mod verdict;

pub use company::CompanyIdentity;
pub use intake_form::IntakeForm;
pub use representative::RepresentativeIdentity;
pub use verdict::ValidationVerdict;
