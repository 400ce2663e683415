use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::{header, HeaderMap};
use axum::Json;
use serde_json::json;

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::{fields, parser};

const NO_DATA: &str = "No data provided";

pub async fn submit(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest(NO_DATA.to_string()));
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let raw = parser::parse_body(content_type, &body).map_err(AppError::BadRequest)?;

    let submission =
        fields::decode(&raw).ok_or_else(|| AppError::BadRequest(NO_DATA.to_string()))?;

    let record = state
        .validator
        .validate(&submission)
        .inspect_err(|reason| tracing::debug!(peer = %addr, "Submission rejected: {reason}"))?;

    let registration = state.store.insert(&record).await?;
    tracing::info!(id = %registration.id, "Registration stored");

    let mut response = json!({
        "message": "Data submitted successfully!",
        "id": registration.id,
    });
    if let Some(url) = &state.config.redirect_url {
        response["redirect"] = json!(url);
    }

    Ok(Json(response))
}
