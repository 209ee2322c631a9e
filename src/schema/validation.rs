//! Schema validation logic.
//!
//! One recursive function walks the rule tree alongside the payload and either
//! produces the validated value or stops at the first violation. Validation is
//! synchronous and has no side effects.

use super::types::{CustomRule, ObjectSchema, Presence, Schema, StringRule, UnknownFields};
use crate::error::{ValidationError, ValidationErrorKind, ValidationResult};
use crate::resource::value_objects::is_valid_email;
use serde_json::{Map, Number, Value};

/// Validate a payload against a schema.
///
/// On success returns the payload with undeclared fields stripped (unless the
/// object schema rejects them) and numeric strings coerced to numbers. On
/// failure returns the first violation found, with its field path.
///
/// ```rust
/// use buddy_api::schema::{Schema, validate};
/// use serde_json::json;
///
/// let schema: Schema = Schema::object()
///     .required("name", Schema::string().max(255))
///     .optional("postal", Schema::Number)
///     .into();
///
/// let value = validate(&schema, &json!({"name": "Jon", "postal": "101", "extra": true})).unwrap();
/// assert_eq!(value, json!({"name": "Jon", "postal": 101}));
///
/// let err = validate(&schema, &json!({})).unwrap_err();
/// assert_eq!(err.to_string(), "name: is required");
/// ```
pub fn validate(schema: &Schema, payload: &Value) -> ValidationResult<Value> {
    validate_value(schema, payload, "")
}

impl Schema {
    /// Validate a payload against this schema. See [`validate`].
    pub fn validate(&self, payload: &Value) -> ValidationResult<Value> {
        validate(self, payload)
    }
}

fn validate_value(schema: &Schema, value: &Value, path: &str) -> ValidationResult<Value> {
    match schema {
        Schema::Any => Ok(value.clone()),
        Schema::String(rule) => validate_string(rule, value, path),
        Schema::Number => validate_number(value, path),
        Schema::Object(object) => validate_object(object, value, path),
        Schema::Enum { values } => validate_enum(values, value, path),
        Schema::Array { items } => validate_array(items, value, path),
        Schema::Custom(rule) => validate_custom(rule, value, path),
    }
}

fn validate_string(rule: &StringRule, value: &Value, path: &str) -> ValidationResult<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| type_error(path, "string", value))?;

    if text.is_empty() && !rule.allow_empty {
        return Err(ValidationError::new(path, ValidationErrorKind::Empty));
    }

    let length = text.chars().count();
    if let Some(min) = rule.min {
        if length < min {
            return Err(ValidationError::new(
                path,
                ValidationErrorKind::TooShort { min },
            ));
        }
    }
    if let Some(max) = rule.max {
        if length > max {
            return Err(ValidationError::new(path, ValidationErrorKind::TooLong { max }));
        }
    }

    if rule.email && !is_valid_email(text) {
        return Err(ValidationError::new(path, ValidationErrorKind::InvalidEmail));
    }

    Ok(value.clone())
}

fn validate_number(value: &Value, path: &str) -> ValidationResult<Value> {
    match value {
        Value::Number(_) => Ok(value.clone()),
        Value::String(text) => {
            coerce_number(text.trim()).ok_or_else(|| type_error(path, "number", value))
        }
        _ => Err(type_error(path, "number", value)),
    }
}

/// Convert a numeric string into a JSON number, preferring integers.
fn coerce_number(text: &str) -> Option<Value> {
    if text.is_empty() {
        return None;
    }
    if let Ok(int) = text.parse::<i64>() {
        return Some(Value::from(int));
    }
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
}

fn validate_object(object: &ObjectSchema, value: &Value, path: &str) -> ValidationResult<Value> {
    let input = value
        .as_object()
        .ok_or_else(|| type_error(path, "object", value))?;

    let mut output = Map::new();

    for field in &object.fields {
        let field_path = child_path(path, &field.name);
        match (field.presence, input.get(&field.name)) {
            (Presence::Required, None) => return Err(ValidationError::required(field_path)),
            (Presence::Forbidden, Some(_)) => {
                return Err(ValidationError::new(
                    field_path,
                    ValidationErrorKind::NotAllowed,
                ));
            }
            (_, Some(field_value)) => {
                let validated = validate_value(&field.schema, field_value, &field_path)?;
                output.insert(field.name.clone(), validated);
            }
            (_, None) => {}
        }
    }

    if object.unknown_fields == UnknownFields::Reject {
        if let Some(unknown) = input.keys().find(|key| object.get_field(key).is_none()) {
            return Err(ValidationError::new(
                child_path(path, unknown),
                ValidationErrorKind::NotAllowed,
            ));
        }
    }

    if let Some(min) = object.min_fields {
        if output.len() < min {
            return Err(ValidationError::new(
                path,
                ValidationErrorKind::TooFewFields { min },
            ));
        }
    }

    Ok(Value::Object(output))
}

fn validate_enum(values: &[String], value: &Value, path: &str) -> ValidationResult<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| type_error(path, "string", value))?;

    if values.iter().any(|allowed| allowed == text) {
        Ok(value.clone())
    } else {
        Err(ValidationError::new(
            path,
            ValidationErrorKind::NotInSet {
                allowed: values.to_vec(),
            },
        ))
    }
}

fn validate_array(items: &Schema, value: &Value, path: &str) -> ValidationResult<Value> {
    let array = value
        .as_array()
        .ok_or_else(|| type_error(path, "array", value))?;

    array
        .iter()
        .enumerate()
        .map(|(index, item)| validate_value(items, item, &format!("{}[{}]", path, index)))
        .collect::<ValidationResult<Vec<Value>>>()
        .map(Value::Array)
}

fn validate_custom(rule: &CustomRule, value: &Value, path: &str) -> ValidationResult<Value> {
    let validated = validate_value(&rule.base, value, path)?;

    if !rule.check(&validated) {
        return Err(ValidationError::new(
            path,
            ValidationErrorKind::Custom {
                rule: rule.name.clone(),
                message: rule.message.clone(),
            },
        ));
    }

    Ok(validated)
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

fn type_error(path: &str, expected: &'static str, actual: &Value) -> ValidationError {
    ValidationError::new(
        path,
        ValidationErrorKind::InvalidType {
            expected,
            actual: json_type_name(actual),
        },
    )
}

/// JSON type name of a value, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
