use crate::dtos::{ErrorResponse, StatusResponse};
use crate::services::seed_defaults;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// Insert the default content into empty collections.
#[utoipa::path(
    post,
    path = "/seed",
    responses(
        (status = 200, description = "Defaults present", body = StatusResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Content"
)]
#[tracing::instrument(skip(state))]
pub async fn seed_content(State(state): State<AppState>) -> Result<Json<StatusResponse>, AppError> {
    let report = seed_defaults(&state.store).await.map_err(|e| {
        tracing::error!(error = %e, "Seeding failed");
        e
    })?;

    tracing::info!(
        menuitem = report.menuitem,
        testimonial = report.testimonial,
        galleryimage = report.galleryimage,
        "Seed complete"
    );

    Ok(Json(StatusResponse::new("ok")))
}
