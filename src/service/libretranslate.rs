use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Detection, Detector, ServiceError, Translator};

pub const DEFAULT_SERVICE_URL: &str = "http://libretranslate:5000";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Blocking HTTP client for a LibreTranslate-compatible service.
///
/// Must not be created or dropped on an async runtime thread; async hosts
/// build it inside `spawn_blocking`.
pub struct LibreTranslateClient {
    base_url: String,
    client: Client,
    timeout_secs: u64,
}

impl LibreTranslateClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ServiceError::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn post<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<Response, ServiceError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    fn map_transport_error(&self, e: reqwest::Error) -> ServiceError {
        if e.is_timeout() {
            ServiceError::Timeout(self.timeout_secs)
        } else if e.is_connect() {
            ServiceError::Connection(self.base_url.clone())
        } else {
            ServiceError::Http(e.to_string())
        }
    }

    fn map_body_error(&self, e: reqwest::Error) -> ServiceError {
        if e.is_timeout() {
            ServiceError::Timeout(self.timeout_secs)
        } else {
            ServiceError::Decode(e.to_string())
        }
    }
}

/// Request body for `/detect`
#[derive(Serialize)]
struct DetectRequest<'a> {
    q: &'a str,
}

/// Request body for `/translate`
#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
}

impl Detector for LibreTranslateClient {
    fn detect(&self, text: &str) -> Result<Detection, ServiceError> {
        let response = self.post("detect", &DetectRequest { q: text })?;

        let parsed: Value = response.json().map_err(|e| self.map_body_error(e))?;

        top_candidate(&parsed)
    }
}

/// First entry of a `/detect` response. Later candidates are never read, so a
/// malformed one further down the list doesn't fail the call.
fn top_candidate(body: &Value) -> Result<Detection, ServiceError> {
    let candidates = body
        .as_array()
        .ok_or_else(|| ServiceError::Decode(format!("expected a candidate list, got {}", body)))?;
    let first = candidates.first().ok_or(ServiceError::NoCandidates)?;

    Detection::deserialize(first).map_err(|e| ServiceError::Decode(e.to_string()))
}

impl Translator for LibreTranslateClient {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, ServiceError> {
        let body = TranslateRequest {
            q: text,
            source,
            target,
        };
        let response = self.post("translate", &body)?;

        let parsed: Value = response.json().map_err(|e| self.map_body_error(e))?;

        parsed
            .get("translatedText")
            .and_then(|v| v.as_str())
            .map(String::from)
            .ok_or(ServiceError::MissingField("translatedText"))
    }
}
