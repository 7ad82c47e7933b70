//! # Server Configuration
//!
//! This module contains the server setup and configuration for the template API.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::handlers;
use crate::handlers::whatsapp_templates::{self, TEMPLATES_PATH};
use crate::telemetry;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .route(
            TEMPLATES_PATH,
            post(whatsapp_templates::create_whatsapp_template)
                .get(whatsapp_templates::list_whatsapp_templates),
        )
        .route(
            "/api/v1/whatsapp-templates/{id}",
            get(whatsapp_templates::get_whatsapp_template),
        )
        .with_state(state);

    api.merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(telemetry::trace_context_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Starts the server with the given configuration
pub async fn run_server(config: AppConfig, db: DatabaseConnection) -> anyhow::Result<()> {
    let state = AppState { db };
    let app = create_app(state);

    let addr = config
        .bind_addr()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {e}"))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, profile = %config.profile, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz,
        crate::handlers::whatsapp_templates::create_whatsapp_template,
        crate::handlers::whatsapp_templates::get_whatsapp_template,
        crate::handlers::whatsapp_templates::list_whatsapp_templates,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::models::TemplateType,
            crate::models::WhatsappTemplateResponse,
            crate::handlers::HealthStatus,
            crate::handlers::whatsapp_templates::CreateWhatsappTemplateDto,
            crate::handlers::whatsapp_templates::WhatsappTemplateListResponse,
            crate::error::ApiError,
        )
    ),
    tags(
        (name = "root", description = "Service information and health"),
        (name = "whatsapp-templates", description = "WhatsApp message templates")
    ),
    info(
        title = "WhatsApp Templates API",
        description = "API for storing reusable WhatsApp message templates",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
