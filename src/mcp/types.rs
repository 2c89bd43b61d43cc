use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Settings;

// ============================================================
// Extraction Types (extract_code, extract_file)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractCodeParams {
    /// Source code snippet to scan
    pub code: String,
    /// Snippet language: csharp, js or sql
    pub language: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractFileParams {
    /// Path of the file to scan; the extension selects the language
    pub file_path: String,
}

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetConfigParams {}

/// Effective settings of the running server
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if a .codetrrc.json was found, false if using defaults
    pub from_file: bool,
    pub service_url: String,
    pub match_threshold: f64,
    pub confidence_scale: String,
    pub source_language: String,
    pub target_language: String,
    pub timeout_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_file: Option<String>,
    pub exclusion_count: usize,
    pub ignores: Vec<String>,
}

impl From<&Settings> for ConfigDto {
    fn from(s: &Settings) -> Self {
        Self {
            from_file: s.from_file,
            service_url: s.service_url.clone(),
            match_threshold: s.rules.threshold,
            confidence_scale: s.confidence_scale.to_string(),
            source_language: s.rules.source_language.clone(),
            target_language: s.rules.target_language.clone(),
            timeout_secs: s.timeout_secs,
            exclude_file: s
                .exclude_source
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            exclusion_count: s.rules.exclusions.len(),
            ignores: s.ignores.clone(),
        }
    }
}
