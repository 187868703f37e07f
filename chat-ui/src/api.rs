use gloo_net::http::Request;
use shared_types::FrontendSettings;
use std::sync::OnceLock;
use thiserror::Error;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:50505
/// - In production: use same origin (the backend serves the static bundle)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:50505".to_string()
    } else {
        String::new()
    }
}

static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(gloo_net::Error),

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("failed to parse JSON: {0}")]
    Decode(gloo_net::Error),
}

/// Fetch `GET /frontend_settings` from the hosting backend.
pub async fn fetch_frontend_settings() -> Result<FrontendSettings, ApiError> {
    let url = format!("{}/frontend_settings", api_base());

    let response = Request::get(&url).send().await.map_err(ApiError::Request)?;

    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
        });
    }

    response.json().await.map_err(ApiError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_carries_status() {
        let err = ApiError::Http { status: 500 };
        assert_eq!(err.to_string(), "HTTP error: 500");
    }
}
