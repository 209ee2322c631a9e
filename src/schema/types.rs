//! Core schema type definitions.
//!
//! A [`Schema`] is a tree of rule nodes interpreted by one recursive validation
//! function (see [`validation`](super::validation)). Schemas are built in code
//! with small builder methods and never mutated afterwards; derived variants
//! such as the partial-update schema are produced by pure transforms.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A validation rule tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Schema {
    /// Accepts any JSON value.
    Any,
    /// A JSON string with optional length and format constraints.
    String(StringRule),
    /// A JSON number. Numeric strings are coerced to numbers.
    Number,
    /// A JSON object with declared fields.
    Object(ObjectSchema),
    /// A string from a closed set of values.
    Enum { values: Vec<String> },
    /// A JSON array whose items all match `items`.
    Array { items: Box<Schema> },
    /// A base schema plus a named predicate.
    Custom(CustomRule),
}

impl Schema {
    /// Start a string rule.
    pub fn string() -> StringRule {
        StringRule::default()
    }

    /// Start an object schema.
    pub fn object() -> ObjectSchema {
        ObjectSchema::default()
    }

    /// A closed set of allowed string values.
    pub fn one_of<I, S>(values: I) -> Schema
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Schema::Enum {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// An array whose items all match `items`.
    pub fn array(items: impl Into<Schema>) -> Schema {
        Schema::Array {
            items: Box::new(items.into()),
        }
    }

    /// Attach a named predicate to a base schema.
    ///
    /// The predicate runs on the value produced by the base schema, only after
    /// the base schema accepted it. `message` is reported when it returns false.
    pub fn custom<F>(
        base: impl Into<Schema>,
        name: impl Into<String>,
        message: impl Into<String>,
        predicate: F,
    ) -> Schema
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Schema::Custom(CustomRule {
            name: name.into(),
            message: message.into(),
            base: Box::new(base.into()),
            predicate: Arc::new(predicate),
        })
    }

    /// Derive the partial-update variant of this schema.
    ///
    /// Only object schemas change; see [`ObjectSchema::partial`].
    pub fn partial(&self) -> Schema {
        match self {
            Schema::Object(object) => Schema::Object(object.partial()),
            other => other.clone(),
        }
    }

    /// Apply an unknown-field policy to every object node in the tree.
    pub fn with_unknown_fields(self, policy: UnknownFields) -> Schema {
        match self {
            Schema::Object(object) => Schema::Object(object.with_unknown_fields_deep(policy)),
            Schema::Array { items } => Schema::Array {
                items: Box::new(items.with_unknown_fields(policy)),
            },
            Schema::Custom(mut rule) => {
                rule.base = Box::new(rule.base.with_unknown_fields(policy));
                Schema::Custom(rule)
            }
            other => other,
        }
    }

    /// The object schema at the root of this tree, if any.
    pub fn as_object(&self) -> Option<&ObjectSchema> {
        match self {
            Schema::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Short type name used in descriptions and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Schema::Any => "any",
            Schema::String(_) | Schema::Enum { .. } => "string",
            Schema::Number => "number",
            Schema::Object(_) => "object",
            Schema::Array { .. } => "array",
            Schema::Custom(rule) => rule.base.type_name(),
        }
    }
}

/// Constraints on a string value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringRule {
    /// Minimum length in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,
    /// Maximum length in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    /// Whether the value must be a syntactically valid email address.
    pub email: bool,
    /// Whether the empty string is accepted.
    pub allow_empty: bool,
}

impl StringRule {
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }
}

impl From<StringRule> for Schema {
    fn from(rule: StringRule) -> Self {
        Schema::String(rule)
    }
}

/// Whether a field must, may, or must not appear in a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Presence {
    Required,
    Optional,
    Forbidden,
}

/// What to do with payload fields the object schema does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UnknownFields {
    /// Drop them from the validated value.
    #[default]
    Strip,
    /// Fail validation.
    Reject,
}

/// A declared object field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub schema: Schema,
    pub presence: Presence,
    /// Immutable fields may be set on create but are forbidden in partial updates.
    pub immutable: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, schema: impl Into<Schema>, presence: Presence) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            presence,
            immutable: false,
        }
    }

    pub fn required(name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        Self::new(name, schema, Presence::Required)
    }

    pub fn optional(name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        Self::new(name, schema, Presence::Optional)
    }

    /// A field callers may never send, such as a store-assigned identifier.
    pub fn forbidden(name: impl Into<String>) -> Self {
        Self::new(name, Schema::Any, Presence::Forbidden)
    }

    /// Mark the field as fixed after creation.
    pub fn immutable(mut self) -> Self {
        self.immutable = true;
        self
    }
}

/// An object schema: ordered fields plus object-level constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSchema {
    /// Name under which the object is described (e.g. `User`, `Address`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub fields: Vec<Field>,
    /// Minimum number of fields the validated object must contain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_fields: Option<usize>,
    pub unknown_fields: UnknownFields,
}

impl ObjectSchema {
    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn required(self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.field(Field::required(name, schema))
    }

    pub fn optional(self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.field(Field::optional(name, schema))
    }

    pub fn forbidden(self, name: impl Into<String>) -> Self {
        self.field(Field::forbidden(name))
    }

    pub fn min_fields(mut self, min: usize) -> Self {
        self.min_fields = Some(min);
        self
    }

    pub fn unknown_fields(mut self, policy: UnknownFields) -> Self {
        self.unknown_fields = policy;
        self
    }

    /// Look up a declared field by name.
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the fields that must be present.
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.presence == Presence::Required)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Derive the partial-update variant.
    ///
    /// Top-level required fields become optional, immutable fields become
    /// forbidden, and at least one field must be present. Nested objects keep
    /// their own rules.
    pub fn partial(&self) -> ObjectSchema {
        let fields = self
            .fields
            .iter()
            .map(|field| {
                let presence = match field.presence {
                    _ if field.immutable => Presence::Forbidden,
                    Presence::Required => Presence::Optional,
                    other => other,
                };
                Field {
                    presence,
                    ..field.clone()
                }
            })
            .collect();

        ObjectSchema {
            class_name: self.class_name.clone(),
            fields,
            min_fields: Some(self.min_fields.unwrap_or(0).max(1)),
            unknown_fields: self.unknown_fields,
        }
    }

    fn with_unknown_fields_deep(self, policy: UnknownFields) -> ObjectSchema {
        let fields = self
            .fields
            .into_iter()
            .map(|field| Field {
                schema: field.schema.with_unknown_fields(policy),
                ..field
            })
            .collect();

        ObjectSchema {
            fields,
            unknown_fields: policy,
            ..self
        }
    }
}

impl From<ObjectSchema> for Schema {
    fn from(object: ObjectSchema) -> Self {
        Schema::Object(object)
    }
}

/// Predicate signature for custom rules.
pub type RulePredicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A named predicate applied after a base schema.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRule {
    pub name: String,
    pub message: String,
    pub base: Box<Schema>,
    #[serde(skip)]
    pub predicate: RulePredicate,
}

impl CustomRule {
    /// Run the predicate.
    pub fn check(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomRule")
            .field("name", &self.name)
            .field("message", &self.message)
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl PartialEq for CustomRule {
    // Predicates themselves are not compared
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.message == other.message && self.base == other.base
    }
}
