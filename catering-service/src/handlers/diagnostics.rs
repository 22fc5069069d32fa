use crate::dtos::{DiagnosticReport, ErrorResponse};
use crate::models::all_schemas;
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde_json::Value;
use service_core::error::AppError;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

#[utoipa::path(
    get,
    path = "/schema",
    responses(
        (status = 200, description = "JSON Schema per collection"),
        (status = 500, description = "Schema could not be rendered", body = ErrorResponse)
    ),
    tag = "Diagnostics"
)]
pub async fn get_schema() -> Result<Json<Value>, AppError> {
    let schemas = all_schemas().map_err(|e| AppError::InternalError(e.into()))?;
    Ok(Json(schemas))
}

fn truncate(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}

/// Report storage connectivity. Never fails: each check degrades its own field.
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Connectivity report", body = DiagnosticReport)
    ),
    tag = "Diagnostics"
)]
#[tracing::instrument(skip(state))]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticReport> {
    let mut report = DiagnosticReport {
        database_name: state.config.database.name.clone(),
        ..DiagnosticReport::default()
    };

    if state.store.is_available() {
        report.database = "✅ Available".to_string();
        report.connection_status = "Connected".to_string();

        match state.store.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_COLLECTIONS);
                report.collections = names;
                report.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Diagnostic collection listing failed");
                report.database = format!(
                    "⚠️  Connected but Error: {}",
                    truncate(&e.to_string(), MAX_ERROR_CHARS)
                );
            }
        }
    } else {
        report.database = "⚠️  Available but not initialized".to_string();
    }

    report.database_url = Some(
        if state.config.database.url.is_some() {
            "✅ Set"
        } else {
            "❌ Not Set"
        }
        .to_string(),
    );

    Json(report)
}
