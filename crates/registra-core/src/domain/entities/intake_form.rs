use serde::{Deserialize, Serialize};

use crate::domain::entities::{CompanyIdentity, RepresentativeIdentity};

/// Snapshot of both intake steps, as captured by a collaborator that
/// collects everything up front (a file, a batch import) rather than field
/// by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeForm {
    pub company: CompanyIdentity,
    pub representative: RepresentativeIdentity,
}

impl IntakeForm {
    pub fn new(company: CompanyIdentity, representative: RepresentativeIdentity) -> Self {
        Self {
            company,
            representative,
        }
    }
}
