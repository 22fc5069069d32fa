pub mod contact_inquiry;
pub mod gallery_image;
pub mod menu_item;
pub mod schema;
pub mod testimonial;

pub use contact_inquiry::ContactInquiry;
pub use gallery_image::GalleryImage;
pub use menu_item::MenuItem;
pub use schema::{FieldError, FieldReader, Record, ValidationError};
pub use testimonial::Testimonial;

use serde_json::{Map, Value};

/// Schemas for every record kind, keyed by collection name.
pub fn all_schemas() -> Result<Value, serde_json::Error> {
    let mut schemas = Map::new();
    schemas.insert(MenuItem::COLLECTION.to_string(), MenuItem::json_schema()?);
    schemas.insert(Testimonial::COLLECTION.to_string(), Testimonial::json_schema()?);
    schemas.insert(GalleryImage::COLLECTION.to_string(), GalleryImage::json_schema()?);
    schemas.insert(
        ContactInquiry::COLLECTION.to_string(),
        ContactInquiry::json_schema()?,
    );
    Ok(Value::Object(schemas))
}
