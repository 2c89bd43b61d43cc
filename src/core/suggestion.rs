use serde::{Deserialize, Serialize};

/// A fragment that looks untranslated, with the service's suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Line the fragment starts on (1-based).
    pub line: usize,
    /// Fragment text, trimmed.
    pub original: String,
    /// Empty when the translation call failed.
    #[serde(rename = "suggest_Translation")]
    pub suggested_translation: String,
}

/// Ordered suggestions of one extraction request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub results: Vec<Suggestion>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}
