use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Luxury Catering API running")]
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "ok")]
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Database not configured: DATABASE_URL is not set")]
    pub detail: String,
}

/// Body of `GET /test`. Every key is always present.
#[derive(Debug, Serialize, ToSchema)]
pub struct DiagnosticReport {
    #[schema(example = "✅ Running")]
    pub backend: String,
    #[schema(example = "✅ Connected & Working")]
    pub database: String,
    /// Whether `DATABASE_URL` is set; the value itself is never echoed
    #[schema(example = "✅ Set")]
    pub database_url: Option<String>,
    /// Configured `DATABASE_NAME`
    pub database_name: Option<String>,
    #[schema(example = "Connected")]
    pub connection_status: String,
    /// At most ten collection names
    pub collections: Vec<String>,
}

impl Default for DiagnosticReport {
    fn default() -> Self {
        Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }
}
