//! Contact record types and domain errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier assigned to a record by the store.
pub type PersonId = u64;

/// A stored contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub number: String,
}

impl Person {
    pub fn new(id: PersonId, name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            number: number.into(),
        }
    }
}

/// Payload for creating a record.
///
/// Both fields are optional at the wire level; a field that is absent, `null`
/// or an empty string counts as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPerson {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            number: Some(number.into()),
        }
    }

    /// Checks presence of both fields, name first.
    pub fn validate(&self) -> PhonebookResult<(&str, &str)> {
        let name = present(&self.name).ok_or(PhonebookError::NameMissing)?;
        let number = present(&self.number).ok_or(PhonebookError::NumberMissing)?;
        Ok((name, number))
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Errors produced by phonebook operations.
///
/// The display strings double as the `error` field of the HTTP payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhonebookError {
    #[error("name missing")]
    NameMissing,

    #[error("number missing")]
    NumberMissing,

    #[error("name must be unique")]
    NameTaken,

    #[error("id not found")]
    NotFound,
}

pub type PhonebookResult<T> = Result<T, PhonebookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_checks_name_first() {
        let payload = NewPerson::default();
        assert_eq!(payload.validate(), Err(PhonebookError::NameMissing));
    }

    #[test]
    fn test_validate_empty_strings_are_missing() {
        let payload = NewPerson::new("", "");
        assert_eq!(payload.validate(), Err(PhonebookError::NameMissing));

        let payload = NewPerson::new("Someone", "");
        assert_eq!(payload.validate(), Err(PhonebookError::NumberMissing));
    }

    #[test]
    fn test_payload_deserializes_with_null_and_absent_fields() {
        let payload: NewPerson = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(payload.name.is_none());
        assert!(payload.number.is_none());
    }

    #[test]
    fn test_person_serializes_in_field_order() {
        let person = Person::new(7, "Ada", "123");
        let json = serde_json::to_string(&person).unwrap();
        assert_eq!(json, r#"{"id":7,"name":"Ada","number":"123"}"#);
    }
}
