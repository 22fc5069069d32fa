//! Shared plumbing for every record kind.
//!
//! Each record derives `ToSchema` for `/schema` and the OpenAPI document,
//! while [`FieldReader`] performs the typed, field-by-field extraction from a
//! stored or submitted document.

use mongodb::bson::{self, Bson, Document};
use serde::Serialize;
use serde_json::{Map, Value};
use service_core::error::AppError;
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// A mapping did not fit a record's declared fields.
#[derive(Debug, Error)]
#[error("Invalid {entity}: {}", join_errors(.errors))]
pub struct ValidationError {
    pub entity: &'static str,
    pub errors: Vec<FieldError>,
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::UnprocessableEntity(anyhow::Error::new(err))
    }
}

impl ValidationError {
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// A record kind persisted in its own collection.
pub trait Record: Serialize + Sized + for<'s> ToSchema<'s> {
    /// Entity title used in error messages.
    const TITLE: &'static str;
    const COLLECTION: &'static str;

    /// Build the record from a mapping, keeping only declared fields.
    fn from_document(doc: &Document) -> Result<Self, ValidationError>;

    fn from_json(payload: &Map<String, Value>) -> Result<Self, ValidationError> {
        let doc = bson::to_document(payload).map_err(|e| ValidationError {
            entity: Self::TITLE,
            errors: vec![FieldError {
                field: "body".to_string(),
                reason: e.to_string(),
            }],
        })?;
        Self::from_document(&doc)
    }

    /// The derived OpenAPI schema as plain JSON.
    fn json_schema() -> Result<Value, serde_json::Error> {
        let (_, schema) = <Self as ToSchema>::schema();
        serde_json::to_value(schema)
    }
}

/// Pulls typed fields out of a document, collecting every failure.
pub struct FieldReader<'a> {
    entity: &'static str,
    doc: &'a Document,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    pub fn new(entity: &'static str, doc: &'a Document) -> Self {
        Self {
            entity,
            doc,
            errors: Vec::new(),
        }
    }

    // Null counts as absent.
    fn present(&self, name: &str) -> Option<&'a Bson> {
        match self.doc.get(name) {
            None | Some(Bson::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn fail(&mut self, name: &str, reason: String) {
        self.errors.push(FieldError {
            field: name.to_string(),
            reason,
        });
    }

    pub fn string(&mut self, name: &str) -> String {
        match self.present(name) {
            Some(Bson::String(s)) => s.clone(),
            Some(_) => {
                self.fail(name, "expected string".to_string());
                String::new()
            }
            None => {
                self.fail(name, "field required".to_string());
                String::new()
            }
        }
    }

    pub fn optional_string(&mut self, name: &str) -> Option<String> {
        match self.present(name) {
            Some(Bson::String(s)) => Some(s.clone()),
            Some(_) => {
                self.fail(name, "expected string".to_string());
                None
            }
            None => None,
        }
    }

    /// Absent lists read as empty.
    pub fn string_list(&mut self, name: &str) -> Vec<String> {
        match self.present(name) {
            Some(Bson::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Bson::String(s) => out.push(s.clone()),
                        _ => {
                            self.fail(name, "expected list of strings".to_string());
                            return Vec::new();
                        }
                    }
                }
                out
            }
            Some(_) => {
                self.fail(name, "expected list of strings".to_string());
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    pub fn optional_integer(&mut self, name: &str) -> Option<i64> {
        match self.present(name) {
            Some(Bson::Int32(n)) => Some(i64::from(*n)),
            Some(Bson::Int64(n)) => Some(*n),
            // JSON bodies carry `5.0` as a double.
            Some(Bson::Double(f)) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            Some(_) => {
                self.fail(name, "expected integer".to_string());
                None
            }
            None => None,
        }
    }

    pub fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError {
                entity: self.entity,
                errors: self.errors,
            })
        }
    }
}
