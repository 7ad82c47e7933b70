//! # WhatsApp Templates Main Entry Point
//!
//! This is the main entry point for the WhatsApp templates service.

use whatsapp_templates::{config::ConfigLoader, db, server::run_server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from layered env files and variables
    let config = ConfigLoader::new().load()?;

    telemetry::init_tracing(&config)?;

    tracing::info!(profile = %config.profile, "Loaded configuration");
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::debug!(config = %redacted_json, "Effective configuration");
    }

    let connection = db::init_pool(&config).await?;
    if config.run_migrations {
        db::run_migrations(&connection).await?;
    }

    run_server(config, connection).await
}
