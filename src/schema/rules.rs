//! Reusable custom rules for the schema engine.

use super::types::Schema;
use crate::resource::value_objects::{
    PERSONAL_ID_MESSAGE, PERSONAL_ID_RULE, is_valid_personal_id,
};
use serde_json::Value;

/// A string that must be a checksum-valid personal identity number.
///
/// ```rust
/// use buddy_api::schema::{rules, validate};
/// use serde_json::json;
///
/// let rule = rules::personal_id();
/// assert!(validate(&rule, &json!("0101302989")).is_ok());
///
/// let err = validate(&rule, &json!("0101302999")).unwrap_err();
/// assert_eq!(err.to_string(), "payload: not a valid personal id");
/// ```
pub fn personal_id() -> Schema {
    Schema::custom(
        Schema::string(),
        PERSONAL_ID_RULE,
        PERSONAL_ID_MESSAGE,
        |value: &Value| value.as_str().is_some_and(is_valid_personal_id),
    )
}
