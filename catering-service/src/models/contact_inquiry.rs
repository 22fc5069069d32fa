use super::schema::{FieldReader, Record, ValidationError};
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// An enquiry sent from the website contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[schema(title = "ContactInquiry")]
pub struct ContactInquiry {
    /// Full name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// Reply address
    #[validate(email(message = "Invalid email address"))]
    #[schema(format = "email", example = "jane@example.com")]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Planned event date
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2026-06-20")]
    pub event_date: Option<String>,
    /// Expected number of guests
    #[validate(range(min = 1, message = "Guest count must be at least 1"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 1, example = 120)]
    pub guest_count: Option<i64>,
    /// Event details
    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub message: String,
}

impl Record for ContactInquiry {
    const TITLE: &'static str = "ContactInquiry";
    const COLLECTION: &'static str = "contactinquiry";

    fn from_document(doc: &Document) -> Result<Self, ValidationError> {
        let mut reader = FieldReader::new(Self::TITLE, doc);
        let inquiry = ContactInquiry {
            name: reader.string("name"),
            email: reader.string("email"),
            phone: reader.optional_string("phone"),
            event_date: reader.optional_string("event_date"),
            guest_count: reader.optional_integer("guest_count"),
            message: reader.string("message"),
        };
        reader.finish(inquiry)
    }
}
