use std::{fs, io, path::Path};

/// Literal substrings that mark a fragment as never-to-be-translated.
///
/// Matching is case-sensitive and plain substring containment; entries are not
/// patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionList {
    entries: Vec<String>,
}

impl ExclusionList {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Parse a line-oriented list. Lines are trimmed and blank lines dropped.
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self { entries }
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    /// True iff any entry occurs in `text`.
    pub fn is_excluded(&self, text: &str) -> bool {
        self.entries.iter().any(|entry| text.contains(entry.as_str()))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
