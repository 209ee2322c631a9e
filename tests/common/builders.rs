//! Payload builders for users and groups.
//!
//! Each builder starts from a minimal valid payload that tests then modify to
//! hit one specific constraint.

use super::fixtures::{ORGANISATION_ID, PERSON_ID};
use serde_json::{Value, json};

/// Builder for user payloads
#[derive(Debug, Clone)]
pub struct UserBuilder {
    data: Value,
}

impl UserBuilder {
    /// Minimal valid user: name and personal id
    pub fn new() -> Self {
        Self {
            data: json!({
                "name": "Jon Jonsson",
                "personalId": PERSON_ID
            }),
        }
    }

    /// User with every field set
    pub fn new_full() -> Self {
        Self::new()
            .with_email("jon@example.is")
            .with_address(json!({
                "street": "Laugavegur",
                "number": "12b",
                "postal": 101,
                "city": "Reykjavik",
                "country": "IS"
            }))
    }

    pub fn with_name(self, name: impl Into<Value>) -> Self {
        self.with_field("name", name)
    }

    pub fn with_email(self, email: impl Into<Value>) -> Self {
        self.with_field("email", email)
    }

    pub fn with_personal_id(self, personal_id: impl Into<Value>) -> Self {
        self.with_field("personalId", personal_id)
    }

    pub fn with_address(self, address: Value) -> Self {
        self.with_field("address", address)
    }

    /// Set any field, declared or not
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.data[name] = value.into();
        self
    }

    /// Remove a field
    pub fn without(mut self, name: &str) -> Self {
        if let Some(obj) = self.data.as_object_mut() {
            obj.remove(name);
        }
        self
    }

    pub fn build(self) -> Value {
        self.data
    }
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for group payloads
#[derive(Debug, Clone)]
pub struct GroupBuilder {
    data: Value,
}

impl GroupBuilder {
    /// Valid group: every field is required
    pub fn new() -> Self {
        Self {
            data: json!({
                "name": "Skatafelagid Landnemar",
                "email": "landnemar@example.is",
                "type": "troop",
                "personalId": ORGANISATION_ID
            }),
        }
    }

    pub fn with_name(self, name: impl Into<Value>) -> Self {
        self.with_field("name", name)
    }

    pub fn with_email(self, email: impl Into<Value>) -> Self {
        self.with_field("email", email)
    }

    pub fn with_type(self, group_type: impl Into<Value>) -> Self {
        self.with_field("type", group_type)
    }

    pub fn with_personal_id(self, personal_id: impl Into<Value>) -> Self {
        self.with_field("personalId", personal_id)
    }

    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.data[name] = value.into();
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        if let Some(obj) = self.data.as_object_mut() {
            obj.remove(name);
        }
        self
    }

    pub fn build(self) -> Value {
        self.data
    }
}

impl Default for GroupBuilder {
    fn default() -> Self {
        Self::new()
    }
}
