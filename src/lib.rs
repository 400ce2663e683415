pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod submission;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::RegistrationStore;
use crate::state::{AppState, SharedState};
use crate::submission::Validator;

pub fn build_app(store: Arc<dyn RegistrationStore>, config: Config) -> (Router, SharedState) {
    tracing::info!(
        country_checks = config.pipeline.country_checks,
        email_check = config.pipeline.email_check,
        "Validation pipeline configured"
    );

    let state: SharedState = Arc::new(AppState {
        store,
        validator: Validator::new(config.pipeline),
        config,
    });

    let app = Router::new()
        .merge(routes::form_routes())
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state.clone());

    (app, state)
}

async fn health() -> &'static str {
    "ok"
}
