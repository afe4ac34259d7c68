//! Catalog Service - entity-type catalog queries.
//!
//! Presentation renders the catalog from here; the validators consume the
//! same [`EntityType`] values, so what is shown and what is accepted cannot
//! drift apart.

use serde::Serialize;

use crate::{
    domain::{DomainError, EntityType, Locale},
    error::RegistraResult,
};

/// Information about a legal form for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityTypeInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub english_label: &'static str,
}

impl EntityTypeInfo {
    pub fn label_in(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Arabic => self.label,
            Locale::English => self.english_label,
        }
    }
}

impl From<EntityType> for EntityTypeInfo {
    fn from(entity: EntityType) -> Self {
        Self {
            id: entity.id(),
            label: entity.label(),
            english_label: entity.english_label(),
        }
    }
}

/// Service for catalog operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// All legal forms, in display order.
    pub fn list(&self) -> Vec<EntityTypeInfo> {
        EntityType::ALL.into_iter().map(EntityTypeInfo::from).collect()
    }

    /// Resolve a selection by id or label.
    pub fn resolve(&self, value: &str) -> RegistraResult<EntityType> {
        EntityType::lookup(value).ok_or_else(|| {
            DomainError::UnknownEntityType {
                id: value.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_has_seven_entries_in_order() {
        let list = CatalogService::new().list();
        assert_eq!(list.len(), 7);
        assert_eq!(list[0].id, "sole_proprietorship");
        assert_eq!(list[1].label, "شركة ذات مسؤولية محدودة");
    }

    #[test]
    fn label_in_picks_locale() {
        let info = EntityTypeInfo::from(EntityType::JointStock);
        assert_eq!(info.label_in(Locale::English), "Joint Stock Company");
        assert_eq!(info.label_in(Locale::Arabic), "شركة مساهمة");
    }

    #[test]
    fn resolve_unknown_is_error() {
        assert!(CatalogService::new().resolve("trust").is_err());
        assert_eq!(
            CatalogService::new().resolve("joint_stock").unwrap(),
            EntityType::JointStock
        );
    }
}
