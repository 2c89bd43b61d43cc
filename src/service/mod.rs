//! Language detection and translation service adapters.
//!
//! The extractor only talks to the [`Detector`] and [`Translator`] traits;
//! [`LibreTranslateClient`] implements both against a LibreTranslate-compatible
//! HTTP API.

mod libretranslate;

pub use libretranslate::{DEFAULT_SERVICE_URL, DEFAULT_TIMEOUT_SECS, LibreTranslateClient};

use serde::Deserialize;
use thiserror::Error;

/// Best language candidate reported by the detection endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Detection {
    pub language: String,
    #[serde(default)]
    pub confidence: f64,
}

impl Detection {
    pub fn new(language: impl Into<String>, confidence: f64) -> Self {
        Self {
            language: language.into(),
            confidence,
        }
    }
}

/// Failure of a single detection or translation call.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("cannot connect to translation service at {0}")]
    Connection(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed service response: {0}")]
    Decode(String),

    #[error("service returned no language candidates")]
    NoCandidates,

    #[error("service response is missing '{0}'")]
    MissingField(&'static str),

    #[error("HTTP client error: {0}")]
    Http(String),
}

/// Detects the language of a text fragment.
pub trait Detector: Send + Sync {
    /// Returns the top-ranked candidate only.
    fn detect(&self, text: &str) -> Result<Detection, ServiceError>;
}

/// Translates a text fragment between two language codes.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, ServiceError>;
}
