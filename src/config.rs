use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::{
    core::{ConfidenceScale, ExclusionList, ExtractRules},
    service::{DEFAULT_SERVICE_URL, DEFAULT_TIMEOUT_SECS, LibreTranslateClient, ServiceError},
};

pub const CONFIG_FILE_NAME: &str = ".codetrrc.json";

/// Exclusion list read from the config root when `excludeFile` is not set.
pub const DEFAULT_EXCLUDE_FILE: &str = "exclude_lines.txt";

/// Environment variable overriding `serviceUrl`.
pub const SERVICE_URL_ENV: &str = "translatorService";

/// Environment variable overriding `matchThreshold`.
pub const THRESHOLD_ENV: &str = "matchThreshold";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_service_url")]
    pub service_url: String,
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,
    #[serde(default)]
    pub confidence_scale: ConfidenceScale,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_file: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

fn default_match_threshold() -> f64 {
    ConfidenceScale::Percent.default_threshold()
}

fn default_source_language() -> String {
    "ru".to_string()
}

fn default_target_language() -> String {
    "uk".to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            match_threshold: default_match_threshold(),
            confidence_scale: ConfidenceScale::default(),
            source_language: default_source_language(),
            target_language: default_target_language(),
            exclude_file: None,
            timeout_secs: default_timeout_secs(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid. Numeric
    /// values are checked later, when settings are resolved, and fall back to
    /// defaults instead of failing.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative paths in the config are resolved against.
    pub root: PathBuf,
}

/// Load the config file.
///
/// `explicit` points at a specific file; otherwise the file is searched for
/// upwards from `start_dir`.
pub fn load_config(start_dir: &Path, explicit: Option<&Path>) -> Result<ConfigLoadResult> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(start_dir),
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                root,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            root: start_dir.to_path_buf(),
        }),
    }
}

/// Values given on the command line. They take precedence over everything else.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub service_url: Option<String>,
    pub threshold: Option<f64>,
    pub confidence_scale: Option<ConfidenceScale>,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub exclude_file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

/// Effective, immutable settings for a run.
///
/// Built once before any extraction starts and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Settings {
    pub service_url: String,
    pub timeout_secs: u64,
    pub confidence_scale: ConfidenceScale,
    pub ignores: Vec<String>,
    /// Where the exclusion list was read from, if it was.
    pub exclude_source: Option<PathBuf>,
    pub rules: ExtractRules,
    /// True if a config file was found.
    pub from_file: bool,
}

impl Settings {
    /// Load settings for a run started in `start_dir`.
    pub fn load(
        start_dir: &Path,
        config_path: Option<&Path>,
        overrides: &Overrides,
    ) -> Result<Self> {
        let loaded = load_config(start_dir, config_path)?;
        Ok(Self::resolve(loaded, overrides, |key| env::var(key).ok()))
    }

    /// Merge config, environment and command line values.
    ///
    /// Invalid numeric values fall back to documented defaults with a warning.
    pub fn resolve(
        loaded: ConfigLoadResult,
        overrides: &Overrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let ConfigLoadResult {
            config,
            from_file,
            root,
        } = loaded;

        let confidence_scale = overrides
            .confidence_scale
            .unwrap_or(config.confidence_scale);
        let (exclusions, exclude_source) = load_exclusions(&root, &config, overrides);

        let service_url = overrides
            .service_url
            .clone()
            .or_else(|| env(SERVICE_URL_ENV))
            .unwrap_or(config.service_url);
        tracing::info!("Using translatorService = {}", service_url);

        let mut threshold = config.match_threshold;
        if let Some(raw) = env(THRESHOLD_ENV) {
            threshold = match raw.trim().parse::<f64>() {
                std::result::Result::Ok(value) => value,
                Err(_) => {
                    tracing::warn!(
                        "Non-float {} value '{}', using default {}",
                        THRESHOLD_ENV,
                        raw,
                        confidence_scale.default_threshold()
                    );
                    confidence_scale.default_threshold()
                }
            };
        }
        if let Some(value) = overrides.threshold {
            threshold = value;
        }
        if !confidence_scale.accepts(threshold) {
            tracing::warn!(
                "matchThreshold {} is outside the {} scale (0..={}), using default {}",
                threshold,
                confidence_scale,
                confidence_scale.max(),
                confidence_scale.default_threshold()
            );
            threshold = confidence_scale.default_threshold();
        }
        tracing::info!("Using matchThreshold = {}", threshold);

        let timeout_secs = match overrides.timeout_secs.unwrap_or(config.timeout_secs) {
            0 => {
                tracing::warn!(
                    "timeoutSecs must be positive, using default {}",
                    DEFAULT_TIMEOUT_SECS
                );
                DEFAULT_TIMEOUT_SECS
            }
            secs => secs,
        };

        Self {
            service_url,
            timeout_secs,
            confidence_scale,
            ignores: config.ignores,
            exclude_source,
            rules: ExtractRules {
                exclusions,
                source_language: overrides
                    .source_language
                    .clone()
                    .unwrap_or(config.source_language),
                target_language: overrides
                    .target_language
                    .clone()
                    .unwrap_or(config.target_language),
                threshold,
            },
            from_file,
        }
    }

    /// HTTP client for the configured detection/translation service.
    ///
    /// Blocking; call from a thread that is not driving an async runtime.
    pub fn service_client(&self) -> std::result::Result<LibreTranslateClient, ServiceError> {
        LibreTranslateClient::new(&self.service_url, self.timeout_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            confidence_scale: ConfidenceScale::default(),
            ignores: Vec::new(),
            exclude_source: None,
            rules: ExtractRules::default(),
            from_file: false,
        }
    }
}

/// Read the exclusion list.
///
/// A file named explicitly (flag or `excludeFile`) that cannot be read is
/// reported as a warning; a missing default file is expected and only logged
/// at debug level. Either way the list falls back to empty.
fn load_exclusions(
    root: &Path,
    config: &Config,
    overrides: &Overrides,
) -> (ExclusionList, Option<PathBuf>) {
    let (path, explicit) = match (&overrides.exclude_file, &config.exclude_file) {
        (Some(path), _) => (path.clone(), true),
        (None, Some(path)) => (root.join(path), true),
        (None, None) => (root.join(DEFAULT_EXCLUDE_FILE), false),
    };

    match ExclusionList::load(&path) {
        std::result::Result::Ok(list) => {
            tracing::info!("Loaded {} lines to exclude from {}", list.len(), path.display());
            (list, Some(path))
        }
        Err(e) if !explicit && e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("No exclusion list at {}", path.display());
            (ExclusionList::default(), None)
        }
        Err(e) => {
            tracing::warn!(
                "Could not load exclude lines from {}: {}",
                path.display(),
                e
            );
            (ExclusionList::default(), None)
        }
    }
}
