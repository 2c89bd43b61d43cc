use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::service::{Detection, Detector, ServiceError};

/// Scale the detection service reports confidences on.
///
/// The threshold is always expressed in the same scale; nothing is inferred
/// from the values the service returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceScale {
    /// 0..=100 (LibreTranslate)
    #[default]
    Percent,
    /// 0..=1
    Fraction,
}

impl ConfidenceScale {
    pub fn max(&self) -> f64 {
        match self {
            ConfidenceScale::Percent => 100.0,
            ConfidenceScale::Fraction => 1.0,
        }
    }

    pub fn default_threshold(&self) -> f64 {
        match self {
            ConfidenceScale::Percent => 90.0,
            ConfidenceScale::Fraction => 0.9,
        }
    }

    /// A threshold is valid when it is finite and within `0..=max`.
    pub fn accepts(&self, threshold: f64) -> bool {
        threshold.is_finite() && (0.0..=self.max()).contains(&threshold)
    }
}

impl fmt::Display for ConfidenceScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceScale::Percent => write!(f, "percent"),
            ConfidenceScale::Fraction => write!(f, "fraction"),
        }
    }
}

/// Outcome of classifying one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub is_source_language: bool,
}

/// Applies the source-language rule on top of a [`Detector`].
///
/// A fragment is in the source language when the top candidate's code equals
/// `source_language` and its confidence is strictly greater than `threshold`.
pub struct Classifier<'a> {
    detector: &'a dyn Detector,
    source_language: &'a str,
    threshold: f64,
}

impl<'a> Classifier<'a> {
    pub fn new(detector: &'a dyn Detector, source_language: &'a str, threshold: f64) -> Self {
        Self {
            detector,
            source_language,
            threshold,
        }
    }

    /// Raw detection result, for callers that want to log the failure.
    pub fn detect(&self, text: &str) -> Result<Detection, ServiceError> {
        self.detector.detect(text)
    }

    pub fn judge(&self, detection: &Detection) -> Classification {
        Classification {
            is_source_language: detection.language == self.source_language
                && detection.confidence > self.threshold,
        }
    }
}
