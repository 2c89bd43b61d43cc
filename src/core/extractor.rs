//! Extraction orchestrator.
//!
//! Runs the tokenizer passes and applies the per-fragment decision procedure:
//!
//! 1. skip fragments matching the exclusion list,
//! 2. skip fragments without Cyrillic characters,
//! 3. ask the detector and keep only confident source-language fragments,
//! 4. ask the translator (failures give an empty suggestion).
//!
//! Fragments are processed one at a time, in discovery order. A failed
//! service call only affects the fragment it was made for.

use thiserror::Error;

use super::{
    Classifier, ExclusionList, ExtractionResult, Fragment, Grammar, Suggestion,
    tokenizer::{tokenize_blocks, tokenize_lines},
};
use crate::{
    service::{Detector, Translator},
    utils::contains_cyrillic,
};

/// Label used in log lines when extracting a snippet without a file name.
const SNIPPET_ORIGIN: &str = "<snippet>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("unsupported grammar")]
    UnsupportedGrammar,
}

/// Read-only rules shared by every extraction request.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractRules {
    pub exclusions: ExclusionList,
    /// Language code that triggers a suggestion, e.g. `ru`.
    pub source_language: String,
    /// Language code suggestions are translated into, e.g. `uk`.
    pub target_language: String,
    /// Confidence must be strictly greater than this.
    pub threshold: f64,
}

impl Default for ExtractRules {
    fn default() -> Self {
        Self {
            exclusions: ExclusionList::default(),
            source_language: "ru".to_string(),
            target_language: "uk".to_string(),
            threshold: 90.0,
        }
    }
}

pub struct Extractor<'a> {
    rules: &'a ExtractRules,
    detector: &'a dyn Detector,
    translator: &'a dyn Translator,
}

impl<'a> Extractor<'a> {
    pub fn new(
        rules: &'a ExtractRules,
        detector: &'a dyn Detector,
        translator: &'a dyn Translator,
    ) -> Self {
        Self {
            rules,
            detector,
            translator,
        }
    }

    /// Extract suggestions from `code`.
    ///
    /// `origin` is only used as context in log lines (usually the file name).
    pub fn extract(
        &self,
        code: &str,
        grammar: Grammar,
        origin: Option<&str>,
    ) -> Result<ExtractionResult, ExtractError> {
        if !grammar.is_supported() {
            return Err(ExtractError::UnsupportedGrammar);
        }

        let origin = origin.unwrap_or(SNIPPET_ORIGIN);
        let results = tokenize_lines(code, grammar)
            .into_iter()
            .chain(tokenize_blocks(code, grammar))
            .filter_map(|fragment| self.process(&fragment, origin))
            .collect();

        Ok(ExtractionResult { results })
    }

    fn process(&self, fragment: &Fragment, origin: &str) -> Option<Suggestion> {
        let line = fragment.start_line;

        if self.rules.exclusions.is_excluded(&fragment.text) {
            tracing::info!(origin, line, text = fragment.text.trim(), "excluded fragment");
            return None;
        }

        if !contains_cyrillic(&fragment.text) {
            return None;
        }

        let classifier = Classifier::new(
            self.detector,
            &self.rules.source_language,
            self.rules.threshold,
        );
        let detection = match classifier.detect(&fragment.text) {
            Ok(detection) => detection,
            Err(e) => {
                tracing::error!(origin, line, error = %e, "language detection failed");
                return None;
            }
        };
        if !classifier.judge(&detection).is_source_language {
            tracing::debug!(
                origin,
                line,
                language = %detection.language,
                confidence = detection.confidence,
                "fragment not in source language"
            );
            return None;
        }

        tracing::info!(
            origin,
            line,
            language = %detection.language,
            confidence = detection.confidence,
            "detected source language"
        );

        let suggested_translation = match self.translator.translate(
            &fragment.text,
            &self.rules.source_language,
            &self.rules.target_language,
        ) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(origin, line, error = %e, "translation failed");
                String::new()
            }
        };

        Some(Suggestion {
            line,
            original: fragment.text.trim().to_string(),
            suggested_translation,
        })
    }
}
