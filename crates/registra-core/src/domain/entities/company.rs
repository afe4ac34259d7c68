use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::ValidationVerdict, validation::CompanyIdentityValidator, value_objects::EntityType,
};

/// The company being registered, as entered so far.
///
/// Starts empty and is edited in place as the user types. Nothing here is
/// checked on assignment; call [`CompanyIdentity::validate`] for a verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyIdentity {
    pub name: String,
    pub entity_type: Option<EntityType>,
    pub registration_number: String,
}

impl CompanyIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_entity_type(mut self, entity_type: EntityType) -> Self {
        self.entity_type = Some(entity_type);
        self
    }

    pub fn with_registration_number(mut self, number: impl Into<String>) -> Self {
        self.registration_number = number.into();
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn select_entity_type(&mut self, entity_type: Option<EntityType>) {
        self.entity_type = entity_type;
    }

    pub fn set_registration_number(&mut self, number: impl Into<String>) {
        self.registration_number = number.into();
    }

    /// Validate the current field values.
    pub fn validate(&self) -> ValidationVerdict {
        CompanyIdentityValidator::validate(&self.name, self.entity_type, &self.registration_number)
    }
}
