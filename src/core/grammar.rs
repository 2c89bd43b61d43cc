use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

/// Lexical rule set used to pull fragments out of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grammar {
    /// C#: `//` comments, `"..."` and `'...'` literals with backslash escapes.
    CSharpLike,
    /// JavaScript: same lexical rules as C#.
    JsLike,
    /// SQL: `--` comments, `'...'` literals with `''` escapes.
    SqlLike,
    /// Not recognized. Extraction is refused for this grammar.
    Unknown,
}

impl Grammar {
    /// Resolve a grammar from a request language name (`csharp`, `js`, `sql`).
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "csharp" => Grammar::CSharpLike,
            "js" => Grammar::JsLike,
            "sql" => Grammar::SqlLike,
            _ => Grammar::Unknown,
        }
    }

    /// Resolve a grammar from a file name by its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let Some(ext) = path.as_ref().extension().and_then(|e| e.to_str()) else {
            return Grammar::Unknown;
        };
        match ext.to_ascii_lowercase().as_str() {
            "cs" => Grammar::CSharpLike,
            "js" => Grammar::JsLike,
            "sql" => Grammar::SqlLike,
            _ => Grammar::Unknown,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Grammar::Unknown)
    }

    /// The request language name for this grammar.
    pub fn name(&self) -> &'static str {
        match self {
            Grammar::CSharpLike => "csharp",
            Grammar::JsLike => "js",
            Grammar::SqlLike => "sql",
            Grammar::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
