use axum::body::Body;
use axum::http::Response;
use viewer_service::config::ViewerConfig;
use viewer_service::startup::{AppState, Application};

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn on a random port after letting the caller adjust the config.
    pub async fn spawn_with(customize: impl FnOnce(&mut ViewerConfig)) -> Self {
        let mut config = ViewerConfig::default();
        config.common.port = 0; // Random port for testing
        customize(&mut config);

        let app = Application::build_with_state(AppState::new(config))
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(&address).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&body).expect("Body is not JSON")
}
