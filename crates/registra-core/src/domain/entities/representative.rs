use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::ValidationVerdict, rules, validation::RepresentativeIdentityValidator,
};

/// The company's legal representative, as entered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentativeIdentity {
    pub full_name: String,
    pub national_id: String,
    pub birth_date: Option<NaiveDate>,
}

impl RepresentativeIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = name.into();
        self
    }

    pub fn with_national_id(mut self, id: impl Into<String>) -> Self {
        self.national_id = id.into();
        self
    }

    pub fn with_birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    pub fn set_full_name(&mut self, name: impl Into<String>) {
        self.full_name = name.into();
    }

    pub fn set_national_id(&mut self, id: impl Into<String>) {
        self.national_id = id.into();
    }

    pub fn select_birth_date(&mut self, date: Option<NaiveDate>) {
        self.birth_date = date;
    }

    /// Full name with whitespace collapsed, as it would be submitted.
    pub fn normalized_name(&self) -> String {
        rules::normalize_name(&self.full_name)
    }

    /// Age on `today`, if a birth date is selected.
    pub fn age_on(&self, today: NaiveDate) -> Option<i32> {
        self.birth_date.map(|birth| rules::age_on(birth, today))
    }

    /// Validate the current field values as of `today`.
    pub fn validate(&self, today: NaiveDate) -> ValidationVerdict {
        RepresentativeIdentityValidator::validate(
            &self.full_name,
            &self.national_id,
            self.birth_date,
            today,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn normalized_name_collapses_runs() {
        let rep = RepresentativeIdentity::new().with_full_name("  Ahmed \t Saleh  Al Saud ");
        assert_eq!(rep.normalized_name(), "Ahmed Saleh Al Saud");
    }

    #[test]
    fn age_requires_birth_date() {
        let mut rep = RepresentativeIdentity::new();
        assert_eq!(rep.age_on(today()), None);
        rep.select_birth_date(NaiveDate::from_ymd_opt(1990, 10, 19));
        assert_eq!(rep.age_on(today()), Some(35));
    }

    #[test]
    fn complete_representative_is_valid() {
        let rep = RepresentativeIdentity::new()
            .with_full_name("Ahmed Saleh Al Saud")
            .with_national_id("1023456789")
            .with_birth_date(NaiveDate::from_ymd_opt(1990, 5, 14).unwrap());
        assert!(rep.validate(today()).is_valid());
    }
}
