#![allow(dead_code)]

use std::sync::Arc;

use qr_service::config::Settings;
use qr_service::services::{init_metrics, QrEncoder, QrcodeEncoder};
use qr_service::{AppState, Application};
use service_core::config::ServerConfig;

pub const DARK: &str = "██";
pub const LIGHT: &str = "  ";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_encoder(Arc::new(QrcodeEncoder::new())).await
    }

    pub async fn spawn_with_encoder(encoder: Arc<dyn QrEncoder>) -> Self {
        init_metrics();

        let settings = Settings {
            service_name: "qr-service-test".to_string(),
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
            },
            ..Settings::default()
        };

        let app = Application::build_with_state(settings, AppState::new(encoder))
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    /// GET /api/qr with the given query pairs.
    pub async fn get_qr(&self, query: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .get(format!("{}/api/qr", self.address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// POST /api/qr with a JSON body.
    pub async fn post_qr_json(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/qr", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Body of a successful GET /api/qr.
    pub async fn render(&self, query: &[(&str, &str)]) -> String {
        let response = self.get_qr(query).await;
        assert_eq!(response.status().as_u16(), 200, "query {:?}", query);
        response.text().await.expect("Failed to read body")
    }
}

/// Splits rendered output into rows of two-character glyphs.
pub fn glyph_rows(text: &str) -> Vec<Vec<String>> {
    text.split('\n')
        .map(|line| {
            let chars: Vec<char> = line.chars().collect();
            chars.chunks(2).map(|pair| pair.iter().collect()).collect()
        })
        .collect()
}
