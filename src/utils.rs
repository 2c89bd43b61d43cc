//! Common utility functions shared across the codebase.

use std::ops::RangeInclusive;

/// The Cyrillic Unicode block.
pub const CYRILLIC_BLOCK: RangeInclusive<char> = '\u{0400}'..='\u{04FF}';

/// Checks if the text contains at least one character from the Cyrillic block
/// (U+0400..=U+04FF).
///
/// This is the cheap pre-filter run before any fragment is sent to the
/// language detection service.
///
/// # Examples
///
/// ```
/// use codetr::utils::contains_cyrillic;
///
/// assert!(contains_cyrillic("Привіт"));
/// assert!(contains_cyrillic("// TODO: это"));
/// assert!(!contains_cyrillic("Hello"));
/// assert!(!contains_cyrillic("你好"));
/// assert!(!contains_cyrillic(""));
/// ```
pub fn contains_cyrillic(text: &str) -> bool {
    text.chars().any(|c| CYRILLIC_BLOCK.contains(&c))
}

/// Returns `count` with the singular or plural form of `noun`.
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
