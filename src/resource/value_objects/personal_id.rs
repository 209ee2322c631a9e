//! PersonalId value object for Icelandic identity numbers (kennitala).
//!
//! A kennitala is ten digits `DDMMYY NN C K`:
//!
//! - `DDMMYY` the birth date, or the registration date for organisations, whose
//!   day is offset by 40 (41-71)
//! - `NN` a sequence number
//! - `C` the check digit
//! - `K` the century digit (`9` for the 1900s, `0` for the 2000s, `8` for the 1800s)
//!
//! The check digit is `11 - (sum mod 11)` over the first eight digits weighted
//! `3,2,7,6,5,4,3,2`, with a remainder of 0 giving check digit 0. A prefix whose
//! computed check digit would be 10 has no valid kennitala.
//!
//! The number may be written with one `-` or space after the date: `010130-2989`.

use crate::error::{ValidationError, ValidationErrorKind, ValidationResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of digits in a personal identity number.
pub const PERSONAL_ID_DIGITS: usize = 10;

/// Name of the schema rule backed by [`is_valid_personal_id`].
pub const PERSONAL_ID_RULE: &str = "personalId";

/// Message reported when the rule rejects a value.
pub const PERSONAL_ID_MESSAGE: &str = "not a valid personal id";

const CHECK_WEIGHTS: [u32; 8] = [3, 2, 7, 6, 5, 4, 3, 2];

/// Offset added to the day of month for organisation numbers.
const ORGANISATION_DAY_OFFSET: u32 = 40;

/// Whether the identity number belongs to a person or an organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalIdKind {
    Person,
    Organisation,
}

/// Check a string against the kennitala format and checksum.
///
/// Never panics; malformed input of any shape yields `false`.
///
/// ```rust
/// use buddy_api::resource::value_objects::is_valid_personal_id;
///
/// assert!(is_valid_personal_id("0101302989"));
/// assert!(is_valid_personal_id("010130-2989"));
/// assert!(!is_valid_personal_id("0101302999"));
/// assert!(!is_valid_personal_id("abc"));
/// ```
pub fn is_valid_personal_id(value: &str) -> bool {
    parse(value).is_some()
}

/// The components of a structurally valid identity number.
struct Parsed {
    digits: [u32; PERSONAL_ID_DIGITS],
    birth_date: NaiveDate,
    kind: PersonalIdKind,
}

fn parse(value: &str) -> Option<Parsed> {
    let digits = split_digits(value)?;

    if expected_check_digit(&digits)? != digits[8] {
        return None;
    }

    let century = match digits[9] {
        9 => 1900,
        0 => 2000,
        8 => 1800,
        _ => return None,
    };

    let mut day = digits[0] * 10 + digits[1];
    let month = digits[2] * 10 + digits[3];
    let year = century + (digits[4] * 10 + digits[5]) as i32;

    let kind = if day > ORGANISATION_DAY_OFFSET {
        day -= ORGANISATION_DAY_OFFSET;
        PersonalIdKind::Organisation
    } else {
        PersonalIdKind::Person
    };

    let birth_date = NaiveDate::from_ymd_opt(year, month, day)?;

    Some(Parsed {
        digits,
        birth_date,
        kind,
    })
}

/// Split the input into its ten digits, accepting one separator after the date.
fn split_digits(value: &str) -> Option<[u32; PERSONAL_ID_DIGITS]> {
    let bytes = value.as_bytes();
    let compact: Vec<u8> = match bytes.len() {
        PERSONAL_ID_DIGITS => bytes.to_vec(),
        11 if matches!(bytes[6], b'-' | b' ') => {
            bytes[..6].iter().chain(&bytes[7..]).copied().collect()
        }
        _ => return None,
    };

    let mut digits = [0u32; PERSONAL_ID_DIGITS];
    for (slot, byte) in digits.iter_mut().zip(&compact) {
        *slot = char::from(*byte).to_digit(10)?;
    }
    Some(digits)
}

/// The check digit for the first eight digits, or `None` when no digit fits.
fn expected_check_digit(digits: &[u32; PERSONAL_ID_DIGITS]) -> Option<u32> {
    let sum: u32 = digits
        .iter()
        .zip(CHECK_WEIGHTS)
        .map(|(digit, weight)| digit * weight)
        .sum();

    match sum % 11 {
        0 => Some(0),
        remainder => {
            let check = 11 - remainder;
            (check < 10).then_some(check)
        }
    }
}

/// A validated personal identity number in its compact ten-digit form.
///
/// ```rust
/// use buddy_api::resource::value_objects::{PersonalId, PersonalIdKind};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let id = PersonalId::new("010130-2989")?;
///     assert_eq!(id.as_str(), "0101302989");
///     assert_eq!(id.kind(), PersonalIdKind::Person);
///
///     assert!(PersonalId::new("0101302999").is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonalId {
    value: String,
    birth_date: NaiveDate,
    kind: PersonalIdKind,
}

impl PersonalId {
    /// Create a new PersonalId with validation.
    pub fn new(value: impl AsRef<str>) -> ValidationResult<Self> {
        let parsed = parse(value.as_ref()).ok_or_else(|| {
            ValidationError::new(
                "",
                ValidationErrorKind::Custom {
                    rule: PERSONAL_ID_RULE.to_string(),
                    message: PERSONAL_ID_MESSAGE.to_string(),
                },
            )
        })?;

        let value = parsed
            .digits
            .iter()
            .filter_map(|d| char::from_digit(*d, 10))
            .collect();

        Ok(Self {
            value,
            birth_date: parsed.birth_date,
            kind: parsed.kind,
        })
    }

    /// The compact ten-digit form.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The encoded birth (or registration) date.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Whether this number identifies a person or an organisation.
    pub fn kind(&self) -> PersonalIdKind {
        self.kind
    }

    /// The `DDMMYY-NNCK` display form.
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.value[..6], &self.value[6..])
    }
}

impl fmt::Display for PersonalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for PersonalId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for PersonalId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(&value).map_err(serde::de::Error::custom)
    }
}
