use super::schema::{FieldReader, Record, ValidationError};
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A client quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(title = "Testimonial")]
pub struct Testimonial {
    /// Client name
    #[schema(example = "Amelia R.")]
    pub name: String,
    /// Event the client hosted
    #[schema(example = "Luxury Wedding, Lake Como")]
    pub title: String,
    pub quote: String,
}

impl Record for Testimonial {
    const TITLE: &'static str = "Testimonial";
    const COLLECTION: &'static str = "testimonial";

    fn from_document(doc: &Document) -> Result<Self, ValidationError> {
        let mut reader = FieldReader::new(Self::TITLE, doc);
        let testimonial = Testimonial {
            name: reader.string("name"),
            title: reader.string("title"),
            quote: reader.string("quote"),
        };
        reader.finish(testimonial)
    }
}
