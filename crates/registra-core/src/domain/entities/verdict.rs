use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::{Field, Locale, ValidationIssue};

/// Outcome of validating one step's fields.
///
/// Built fresh for every validation request and handed to the caller by
/// value. A field with no entry is valid; the verdict is valid iff there are
/// no entries at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    field_errors: BTreeMap<Field, ValidationIssue>,
}

impl ValidationVerdict {
    /// An empty (valid) verdict.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `issue` against `field`, if any.
    ///
    /// Validators call this once per field with the result of the field's
    /// check, so every field is evaluated regardless of earlier failures.
    pub fn record(&mut self, field: Field, issue: Option<ValidationIssue>) {
        if let Some(issue) = issue {
            self.field_errors.insert(field, issue);
        }
    }

    pub fn with_error(mut self, field: Field, issue: ValidationIssue) -> Self {
        self.field_errors.insert(field, issue);
        self
    }

    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.field_errors.len()
    }

    pub fn error_for(&self, field: Field) -> Option<ValidationIssue> {
        self.field_errors.get(&field).copied()
    }

    /// Offending fields in form order.
    pub fn field_errors(&self) -> impl Iterator<Item = (Field, ValidationIssue)> + '_ {
        self.field_errors.iter().map(|(f, i)| (*f, *i))
    }

    /// Message for `field` in `locale`, or `None` if the field is valid.
    pub fn message_for(&self, field: Field, locale: Locale) -> Option<&'static str> {
        self.error_for(field)
            .map(|issue| issue.message(field, locale))
    }

    /// Field → message map, ready to be shown beside each field.
    pub fn messages(&self, locale: Locale) -> BTreeMap<Field, &'static str> {
        self.field_errors()
            .map(|(field, issue)| (field, issue.message(field, locale)))
            .collect()
    }
}
