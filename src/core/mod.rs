//! Core extraction engine.
//!
//! - `grammar`: lexical rule set selection
//! - `tokenizer`: comment and literal fragment extraction
//! - `exclusion`: literal substring exclusion list
//! - `classifier`: source-language decision on top of a detector
//! - `extractor`: per-fragment pipeline producing suggestions
//! - `source`: decoding of raw file bytes

mod classifier;
mod exclusion;
mod extractor;
mod fragment;
mod grammar;
mod source;
mod suggestion;
pub mod tokenizer;

pub use classifier::{Classification, Classifier, ConfidenceScale};
pub use exclusion::ExclusionList;
pub use extractor::{ExtractError, ExtractRules, Extractor};
pub use fragment::{Fragment, FragmentKind};
pub use grammar::Grammar;
pub use source::{DecodedSource, decode_source};
pub use suggestion::{ExtractionResult, Suggestion};
