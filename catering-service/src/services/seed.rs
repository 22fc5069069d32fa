//! Default website content, inserted into empty collections on `POST /seed`.

use super::database::{DocumentStore, StorageError};
use crate::models::{GalleryImage, MenuItem, Record, Testimonial};
use metrics::counter;

pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            title: "Black Truffle Arancini".to_string(),
            description: "Crisp risotto pearls with aged Parmesan and shaved truffle.".to_string(),
            category: "Canapés".to_string(),
            tags: vec!["vegetarian".to_string(), "signature".to_string()],
            image_url: "https://images.unsplash.com/photo-1544025162-d76694265947?q=80&w=1600&auto=format&fit=crop".to_string(),
        },
        MenuItem {
            title: "Butter-Poached Lobster".to_string(),
            description: "Champagne velouté, fennel pollen, and gold leaf.".to_string(),
            category: "Mains".to_string(),
            tags: vec!["seafood".to_string()],
            image_url: "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?q=80&w=1600&auto=format&fit=crop".to_string(),
        },
        MenuItem {
            title: "Valrhona Chocolate Tart".to_string(),
            description: "Sea salt ganache, vanilla crème, cacao nib praline.".to_string(),
            category: "Desserts".to_string(),
            tags: vec!["dessert".to_string()],
            image_url: "https://images.unsplash.com/photo-1551024709-8f23befc6cf7?q=80&w=1600&auto=format&fit=crop".to_string(),
        },
    ]
}

pub fn default_testimonials() -> Vec<Testimonial> {
    [
        (
            "Amelia R.",
            "Luxury Wedding, Lake Como",
            "Impeccable from first tasting to the final toast. A flawless experience.",
        ),
        (
            "Marcus L.",
            "Global Summit Gala",
            "World-class service that impressed every executive in the room.",
        ),
        (
            "Sofia N.",
            "Private Chef’s Table",
            "Each course arrived like art. Understated, elegant, unforgettable.",
        ),
    ]
    .into_iter()
    .map(|(name, title, quote)| Testimonial {
        name: name.to_string(),
        title: title.to_string(),
        quote: quote.to_string(),
    })
    .collect()
}

pub fn default_gallery() -> Vec<GalleryImage> {
    [
        (
            "https://images.unsplash.com/photo-1504754524776-8f4f37790ca0?q=80&w=1600&auto=format&fit=crop",
            "Caviar canapés",
        ),
        (
            "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?q=80&w=1600&auto=format&fit=crop",
            "Fine dining table",
        ),
        (
            "https://images.unsplash.com/photo-1542826438-5ec323d1cb97?q=80&w=1600&auto=format&fit=crop",
            "Elegant dessert",
        ),
        (
            "https://images.unsplash.com/photo-1529042410759-befb1204b468?q=80&w=1600&auto=format&fit=crop",
            "Champagne service",
        ),
        (
            "https://images.unsplash.com/photo-1541870730196-cd1efcbf5646?q=80&w=1600&auto=format&fit=crop",
            "Gourmet plating",
        ),
        (
            "https://images.unsplash.com/photo-1516683037151-9d56a6a58c89?q=80&w=1600&auto=format&fit=crop",
            "Chef in action",
        ),
    ]
    .into_iter()
    .map(|(url, alt)| GalleryImage {
        url: url.to_string(),
        alt: alt.to_string(),
    })
    .collect()
}

/// Documents inserted per collection by one seeding run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub menuitem: usize,
    pub testimonial: usize,
    pub galleryimage: usize,
}

/// Insert defaults into each content collection that is currently empty.
///
/// Check-then-insert is not atomic: two concurrent runs can both see an
/// empty collection and insert twice.
pub async fn seed_defaults(store: &DocumentStore) -> Result<SeedReport, StorageError> {
    Ok(SeedReport {
        menuitem: seed_collection(store, &default_menu()).await?,
        testimonial: seed_collection(store, &default_testimonials()).await?,
        galleryimage: seed_collection(store, &default_gallery()).await?,
    })
}

async fn seed_collection<T: Record>(
    store: &DocumentStore,
    defaults: &[T],
) -> Result<usize, StorageError> {
    let existing = store.count_documents(T::COLLECTION).await?;
    if existing > 0 {
        tracing::debug!(collection = T::COLLECTION, existing, "Collection already seeded");
        return Ok(0);
    }

    for record in defaults {
        store.create_document(T::COLLECTION, record).await?;
    }

    counter!("catering_seeded_documents_total", "collection" => T::COLLECTION)
        .increment(defaults.len() as u64);
    tracing::info!(collection = T::COLLECTION, inserted = defaults.len(), "Seeded defaults");

    Ok(defaults.len())
}
