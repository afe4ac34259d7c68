//! Jurisdiction rule set.
//!
//! Every pattern and threshold the validators apply is defined here, once.
//! The functions are pure and operate on byte slices where the rule is
//! ASCII-only, so they never allocate.
//!
//! | Rule                     | Constraint                          |
//! |--------------------------|-------------------------------------|
//! | Commercial registration  | `^(10\|40\|70)\d{8}$`               |
//! | National ID              | `^1\d{9}$`                          |
//! | Legal name               | ≥ 2 whitespace-separated tokens     |
//! | Age of majority          | 18 whole years                      |

use chrono::{Datelike, NaiveDate};

use crate::domain::error::DomainError;

/// Length of a commercial registration number.
pub const REGISTRATION_NUMBER_LEN: usize = 10;

/// Prefixes a commercial registration number may start with.
pub const REGISTRATION_PREFIXES: &[&str] = &["10", "40", "70"];

/// Length of a national ID.
pub const NATIONAL_ID_LEN: usize = 10;

/// First digit of a citizen national ID.
pub const NATIONAL_ID_PREFIX: u8 = b'1';

/// Minimum number of tokens in a legal name.
///
/// The form asks for a four-part name but only first and family name are
/// mechanically required.
pub const MIN_NAME_TOKENS: usize = 2;

/// Age, in whole years, at which a person may act as legal representative.
pub const AGE_OF_MAJORITY: i32 = 18;

/// Date format accepted wherever a calendar date arrives as text.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn is_ascii_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `value` is a well-formed commercial registration number.
///
/// Purely a prefix-and-length match; there is no check digit.
pub fn is_registration_number(value: &str) -> bool {
    is_ascii_digits(value, REGISTRATION_NUMBER_LEN)
        && REGISTRATION_PREFIXES
            .iter()
            .any(|prefix| value.starts_with(prefix))
}

/// Whether `value` is a well-formed national ID.
pub fn is_national_id(value: &str) -> bool {
    is_ascii_digits(value, NATIONAL_ID_LEN) && value.as_bytes().first() == Some(&NATIONAL_ID_PREFIX)
}

/// Number of tokens in a name after trimming and collapsing whitespace.
pub fn name_token_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Whether `value` satisfies the legal-name token minimum.
pub fn is_complete_name(value: &str) -> bool {
    name_token_count(value) >= MIN_NAME_TOKENS
}

/// Trim and collapse internal whitespace runs to single spaces.
pub fn normalize_name(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Age in whole years on `today` for someone born on `birth`.
///
/// Calendar-aware: the year difference is reduced by one when today's
/// (month, day) falls strictly before the birthday's. A birth date in the
/// future yields a negative age.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Whether someone born on `birth` has reached the age of majority on `today`.
pub fn is_of_age(birth: NaiveDate, today: NaiveDate) -> bool {
    age_on(birth, today) >= AGE_OF_MAJORITY
}

/// Parse a `YYYY-MM-DD` date coming from outside the engine.
pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| DomainError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
