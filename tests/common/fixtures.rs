//! Test fixtures: identity numbers and payloads.

use serde_json::{Value, json};

/// A valid personal number (born 1 January 1930).
pub const PERSON_ID: &str = "0101302989";

/// A valid organisation number (registered 1 January 1930).
pub const ORGANISATION_ID: &str = "4101302039";

/// Personal numbers that pass format, date and checksum.
pub const VALID_PERSONAL_IDS: &[&str] = &[
    "0101302989",
    "0101302479",
    "1203992099",
    "2902042080", // leap day 2004
    "3112995069",
    "0101302988", // 1800s
    "010130-2989",
    "010130 2989",
    "4101302039",
    "7112991819",
];

/// Strings that must be rejected, with the reason.
pub const INVALID_PERSONAL_IDS: &[(&str, &str)] = &[
    ("0101302999", "wrong check digit"),
    ("0101302979", "wrong check digit"),
    ("0101302490", "wrong check digit"),
    ("0101302981", "unknown century digit"),
    ("2902992099", "29 February 1999"),
    ("3002002069", "30 February 2000"),
    ("1505711200", "prefix without a valid check digit"),
    ("010130298", "too short"),
    ("01013029890", "too long"),
    ("010130/2989", "bad separator"),
    ("01013o2989", "non-digit"),
    ("", "empty"),
];

/// Payload of the first user scenario.
pub fn scenario_user() -> Value {
    json!({
        "name": "Jon Jonsson",
        "personalId": PERSON_ID,
        "address": {"city": "Reykjavik"}
    })
}

/// A syntactically valid identifier no document has.
pub const UNKNOWN_ID: &str = "7c9e6679-7425-40de-944b-e07fc1f90ae7";

/// An identifier the store cannot parse.
pub const MALFORMED_ID: &str = "not-an-object-id";
