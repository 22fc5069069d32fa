use super::schema::{FieldReader, Record, ValidationError};
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A dish on the catering menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(title = "MenuItem")]
pub struct MenuItem {
    /// Dish name
    #[schema(example = "Black Truffle Arancini")]
    pub title: String,
    /// Short description
    pub description: String,
    /// Course, e.g. Canapés, Mains, Desserts
    #[schema(example = "Canapés")]
    pub category: String,
    /// Dietary or feature tags
    #[serde(default)]
    #[schema(example = json!(["vegetarian", "signature"]))]
    pub tags: Vec<String>,
    /// Image URL
    #[schema(format = "uri")]
    pub image_url: String,
}

impl Record for MenuItem {
    const TITLE: &'static str = "MenuItem";
    const COLLECTION: &'static str = "menuitem";

    fn from_document(doc: &Document) -> Result<Self, ValidationError> {
        let mut reader = FieldReader::new(Self::TITLE, doc);
        let item = MenuItem {
            title: reader.string("title"),
            description: reader.string("description"),
            category: reader.string("category"),
            tags: reader.string_list("tags"),
            image_url: reader.string("image_url"),
        };
        reader.finish(item)
    }
}
