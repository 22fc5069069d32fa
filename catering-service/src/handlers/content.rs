use crate::dtos::ErrorResponse;
use crate::models::{GalleryImage, MenuItem, Record, Testimonial};
use crate::services::DocumentStore;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// Load a collection and shape each document through its schema.
///
/// A stored document that no longer fits the schema fails the whole request.
async fn list_records<T: Record>(store: &DocumentStore) -> Result<Vec<T>, AppError> {
    let documents = store.get_documents(T::COLLECTION).await?;

    documents
        .iter()
        .map(|doc| {
            T::from_document(doc).map_err(|e| {
                tracing::error!(
                    collection = T::COLLECTION,
                    error = %e,
                    "Stored document does not match schema"
                );
                AppError::DatabaseError(anyhow::Error::new(e))
            })
        })
        .collect()
}

#[utoipa::path(
    get,
    path = "/menu",
    responses(
        (status = 200, description = "All menu items", body = [MenuItem]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Content"
)]
#[tracing::instrument(skip(state))]
pub async fn get_menu(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>, AppError> {
    Ok(Json(list_records(&state.store).await?))
}

#[utoipa::path(
    get,
    path = "/testimonials",
    responses(
        (status = 200, description = "All testimonials", body = [Testimonial]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Content"
)]
#[tracing::instrument(skip(state))]
pub async fn get_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    Ok(Json(list_records(&state.store).await?))
}

#[utoipa::path(
    get,
    path = "/gallery",
    responses(
        (status = 200, description = "All gallery images", body = [GalleryImage]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Content"
)]
#[tracing::instrument(skip(state))]
pub async fn get_gallery(
    State(state): State<AppState>,
) -> Result<Json<Vec<GalleryImage>>, AppError> {
    Ok(Json(list_records(&state.store).await?))
}
