use crate::config::{CorsSettings, ViewerConfig};
use crate::handlers;
use crate::services::{AvatarCatalog, AvatarIdGenerator, FrameTransformer, PassthroughTransformer};
use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::tracing::make_request_span;
use service_core::middleware::{metrics_middleware, request_id_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: ViewerConfig,
    pub transformer: Arc<dyn FrameTransformer>,
    pub avatar_ids: AvatarIdGenerator,
    pub catalog: AvatarCatalog,
}

impl AppState {
    /// State with the passthrough transformer and a freshly seeded id generator.
    pub fn new(config: ViewerConfig) -> Self {
        Self::with_transformer(config, Arc::new(PassthroughTransformer::new()))
    }

    pub fn with_transformer(config: ViewerConfig, transformer: Arc<dyn FrameTransformer>) -> Self {
        Self {
            config,
            transformer,
            avatar_ids: AvatarIdGenerator::new(),
            catalog: AvatarCatalog,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);
    let body_limit = state.config.server.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::root))
        .route("/api/transform", post(handlers::transform_frame))
        .route("/api/upload_avatar", post(handlers::upload_avatar))
        .route("/api/avatars", get(handlers::list_avatars))
        .route("/metrics", get(handlers::metrics_endpoint))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(from_fn(request_id_middleware))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    // Credentials rule out a literal `*`, so "any" is done by echoing the request.
    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    if settings.allows_any_origin() {
        tracing::warn!(
            "CORS accepts credentialed requests from any origin; set VIEWER_CORS_ORIGINS before production"
        );
        return layer.allow_origin(AllowOrigin::mirror_request());
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Invalid CORS origin '{}': {}. Skipping.", o, e);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: ViewerConfig) -> Result<Self, AppError> {
        Self::build_with_state(AppState::new(config)).await
    }

    pub async fn build_with_state(state: AppState) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            transformer = state.transformer.name(),
            max_upload_bytes = state.config.server.max_upload_bytes,
            "Listening on {}",
            port
        );

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
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
