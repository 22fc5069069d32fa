use super::schema::{FieldReader, Record, ValidationError};
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A photo in the event gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(title = "GalleryImage")]
pub struct GalleryImage {
    #[schema(format = "uri")]
    pub url: String,
    /// Alt text
    #[schema(example = "Champagne service")]
    pub alt: String,
}

impl Record for GalleryImage {
    const TITLE: &'static str = "GalleryImage";
    const COLLECTION: &'static str = "galleryimage";

    fn from_document(doc: &Document) -> Result<Self, ValidationError> {
        let mut reader = FieldReader::new(Self::TITLE, doc);
        let image = GalleryImage {
            url: reader.string("url"),
            alt: reader.string("alt"),
        };
        reader.finish(image)
    }
}
