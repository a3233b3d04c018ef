use service_core::observability::init_tracing;
use viewer_service::config::ViewerConfig;
use viewer_service::services::init_metrics;
use viewer_service::startup::Application;

const SERVICE_NAME: &str = "viewer-service";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = ViewerConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(
        SERVICE_NAME,
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );

    // Recorder must be installed before the first request records anything.
    if !init_metrics() {
        tracing::warn!("Prometheus recorder unavailable; /metrics will be empty");
    }

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
