use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use registrar::config::Config;
use registrar::db::{RegistrationStore, SqliteStore};
use registrar::submission::PipelineOptions;

/// A running test server instance backed by an in-memory database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit JSON to the form endpoint, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit form-urlencoded data, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        pipeline: PipelineOptions::default(),
        redirect_url: Some("/thank-you".to_string()),
        max_body_size: 65_536,
        log_level: "warn".to_string(),
    }
}

pub async fn memory_pool() -> SqlitePool {
    // A single long-lived connection keeps the in-memory database alive.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    pool
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config()).await
}

pub async fn spawn_app_with(config: Config) -> TestApp {
    let pool = memory_pool().await;
    let store = Arc::new(SqliteStore::new(pool.clone()));
    let addr = serve(store, config).await;

    TestApp {
        addr,
        pool,
        client: client(),
    }
}

/// Serve the app over an arbitrary store, return the bound address.
pub async fn serve(store: Arc<dyn RegistrationStore>, config: Config) -> SocketAddr {
    let (app, _state) = registrar::build_app(store, config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    addr
}

pub fn client() -> Client {
    Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

/// The canonical fully valid submission.
pub fn valid_submission() -> Value {
    json!({
        "name": "Jo",
        "email": "jo@x.com",
        "phone": "+14155552671",
        "country": "United States",
        "postal": "94105",
        "dob": "2000-01-01",
    })
}
