/// Lexical kind of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// `// ...` or `-- ...` up to the end of the line.
    LineComment,
    /// `/* ... */`, possibly spanning several lines.
    BlockComment,
    /// A quoted string or char literal, quotes included.
    StringLiteral,
}

/// A comment or string literal pulled out of source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Raw matched text, untrimmed.
    pub text: String,
    /// 1-based line the fragment starts on.
    pub start_line: usize,
    /// 1-based line the fragment ends on. Equal to `start_line` unless this
    /// is a multi-line block comment.
    pub end_line: usize,
    pub kind: FragmentKind,
}

impl Fragment {
    pub fn single_line(text: impl Into<String>, line: usize, kind: FragmentKind) -> Self {
        Self {
            text: text.into(),
            start_line: line,
            end_line: line,
            kind,
        }
    }

    pub fn block(text: impl Into<String>, start_line: usize) -> Self {
        let text = text.into();
        let end_line = start_line + text.matches('\n').count();
        Self {
            text,
            start_line,
            end_line,
            kind: FragmentKind::BlockComment,
        }
    }
}
