use crate::config::CateringConfig;
use crate::services::DocumentStore;
use crate::{dtos, handlers, models};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    tracing::{http_trace_layer, request_id_middleware},
};
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Luxury Catering API", version = "1.0.0"),
    paths(
        handlers::health::read_root,
        handlers::health::health_check,
        handlers::health::metrics_endpoint,
        handlers::diagnostics::get_schema,
        handlers::diagnostics::test_database,
        handlers::seed::seed_content,
        handlers::content::get_menu,
        handlers::content::get_testimonials,
        handlers::content::get_gallery,
        handlers::contact::post_contact,
    ),
    components(
        schemas(
            models::MenuItem,
            models::Testimonial,
            models::GalleryImage,
            models::ContactInquiry,
            dtos::MessageResponse,
            dtos::StatusResponse,
            dtos::ErrorResponse,
            dtos::DiagnosticReport,
        )
    ),
    tags(
        (name = "Content", description = "Menu, testimonials, gallery and seeding"),
        (name = "Contact", description = "Contact form submissions"),
        (name = "Diagnostics", description = "Schema and storage introspection"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: CateringConfig,
    pub store: DocumentStore,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::read_root))
        .route("/schema", get(handlers::get_schema))
        .route("/seed", post(handlers::seed_content))
        .route("/menu", get(handlers::get_menu))
        .route("/testimonials", get(handlers::get_testimonials))
        .route("/gallery", get(handlers::get_gallery))
        .route("/contact", post(handlers::post_contact))
        .route("/test", get(handlers::test_database))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(from_fn(metrics_middleware))
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
}

pub struct Application {
    port: u16,
    server: Box<dyn Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: CateringConfig) -> Result<Self, AppError> {
        let store = DocumentStore::connect(&config.database).await;
        Self::build_with_store(config, store).await
    }

    pub async fn build_with_store(
        config: CateringConfig,
        store: DocumentStore,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            store,
        };
        let app = build_router(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn store(&self) -> &DocumentStore {
        &self.state.store
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
