use crate::dtos::{ErrorResponse, StatusResponse};
use crate::models::{ContactInquiry, Record};
use crate::startup::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use metrics::counter;
use serde_json::{Map, Value};
use service_core::error::AppError;
use validator::Validate;

/// Accept a contact-form submission.
///
/// Shape and content are checked before anything touches storage, so a bad
/// payload is a 422 even when the database is down.
#[utoipa::path(
    post,
    path = "/contact",
    request_body = ContactInquiry,
    responses(
        (status = 200, description = "Inquiry stored", body = StatusResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Contact"
)]
#[tracing::instrument(skip(state, payload))]
pub async fn post_contact(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    let Json(payload) =
        payload.map_err(|e| AppError::UnprocessableEntity(anyhow::anyhow!(e.body_text())))?;

    let inquiry = ContactInquiry::from_json(&payload).map_err(|e| {
        tracing::warn!(error = %e, "Rejected contact inquiry");
        e
    })?;
    inquiry.validate()?;

    let inquiry_id = state
        .store
        .create_document(ContactInquiry::COLLECTION, &inquiry)
        .await?;

    counter!("catering_contact_inquiries_total").increment(1);
    tracing::info!(inquiry_id = %inquiry_id, "Contact inquiry received");

    Ok(Json(StatusResponse::new("received")))
}
