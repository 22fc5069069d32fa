use catering_service::config::CateringConfig;
use catering_service::services::init_metrics;
use catering_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), service_core::error::AppError> {
    let config = CateringConfig::load()?;

    init_tracing(
        "catering-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );
    init_metrics()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.common.port,
        database_configured = config.database.url.is_some(),
        "Starting catering service"
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    tracing::info!("Catering service stopped");
    Ok(())
}
