//! Field-level validation failures and their JSON rendering.

use std::collections::BTreeMap;
use std::fmt;

use bookshelf_http::AppError;
use serde_json::{Map, Value};

/// Key used for errors that concern the payload as a whole.
pub const SCHEMA_FIELD: &str = "_schema";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent or null, or (`blank`) present but empty
    /// or zero.
    MissingField { field: &'static str, blank: bool },
    InvalidType { expected: &'static str },
    UnknownField,
    /// The payload is not a JSON object.
    InvalidInput,
    DuplicateTitle { title: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { blank: false, .. } => {
                write!(f, "Missing data for required field.")
            }
            Self::MissingField { field, blank: true } => write!(f, "{field} not sent"),
            Self::InvalidType { expected } => write!(f, "Not a valid {expected}."),
            Self::UnknownField => write!(f, "Unknown field."),
            Self::InvalidInput => write!(f, "Invalid input type."),
            Self::DuplicateTitle { title } => write!(
                f,
                "Book with title \"{title}\" already exists, please use a different title."
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldEntry {
    Errors(Vec<ValidationError>),
    Nested(FieldErrors),
}

/// Validation failures keyed by field name, nested for embedded payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<String, FieldEntry>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.add(field, error);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, error: ValidationError) {
        let entry = self
            .entries
            .entry(field.into())
            .or_insert_with(|| FieldEntry::Errors(Vec::new()));
        match entry {
            FieldEntry::Errors(list) => list.push(error),
            FieldEntry::Nested(nested) => nested.add(SCHEMA_FIELD, error),
        }
    }

    pub fn nest(&mut self, field: impl Into<String>, errors: FieldErrors) {
        if !errors.is_empty() {
            self.entries.insert(field.into(), FieldEntry::Nested(errors));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Errors recorded directly on `field`.
    pub fn errors(&self, field: &str) -> &[ValidationError] {
        match self.entries.get(field) {
            Some(FieldEntry::Errors(list)) => list,
            _ => &[],
        }
    }

    pub fn nested(&self, field: &str) -> Option<&FieldErrors> {
        match self.entries.get(field) {
            Some(FieldEntry::Nested(nested)) => Some(nested),
            _ => None,
        }
    }

    /// Render as `{"field": ["message", ...], "nested": {...}}`.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(field, entry)| {
                let value = match entry {
                    FieldEntry::Errors(list) => Value::Array(
                        list.iter()
                            .map(|error| Value::String(error.to_string()))
                            .collect(),
                    ),
                    FieldEntry::Nested(nested) => nested.to_json(),
                };
                (field.clone(), value)
            })
            .collect();
        Value::Object(map)
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::validation(errors.to_json())
    }
}
