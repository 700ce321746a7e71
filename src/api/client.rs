//! HTTP API Client
//!
//! Functions for communicating with the AirSense prediction service.
//! Each call is a single best-effort attempt; failures resolve to a
//! human-readable message (server error body when present, transport
//! error otherwise).

use gloo_net::http::Request;

use crate::state::global::{ModelInfo, Prediction, SensorReading, ServiceHealth};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Local storage key holding the configured base URL
const API_URL_STORAGE_KEY: &str = "airsense_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_STORAGE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_STORAGE_KEY, url);
        }
    }
}

/// Error envelope the service attaches to non-ok responses
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub detail: String,
}

/// Extract a displayable message from a non-ok response body, falling
/// back to the HTTP status when the body is not the expected envelope.
async fn error_message(response: gloo_net::http::Response, fallback: &str) -> String {
    match response.json::<ApiError>().await {
        Ok(err) => err.detail,
        Err(_) => format!("{} (HTTP {})", fallback, response.status()),
    }
}

/// Request an AQI prediction for one set of sensor readings
pub async fn predict(reading: &SensorReading) -> Result<Prediction, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/predict", api_base))
        .json(reading)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Prediction failed").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Check service health
pub async fn fetch_health() -> Result<ServiceHealth, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/health", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Service is not healthy").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch metadata about the loaded prediction model
pub async fn fetch_model_info() -> Result<ModelInfo, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/model-info", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Model info unavailable").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
