//! Lexical fragment extraction.
//!
//! Two independent passes:
//!
//! - a per-line pass collecting line comments and quoted literals using the
//!   grammar's rules, and
//! - a whole-text pass collecting `/* ... */` block comments.
//!
//! The passes don't know about each other. A `// ...` inside a block comment
//! is reported by both, and quotes inside comments still count as literals.

use std::sync::LazyLock;

use regex::Regex;

use super::{Fragment, FragmentKind, Grammar};

/// Line boundaries: CRLF, a lone CR or LF, and the other Unicode line separators.
static LINE_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]").unwrap()
});

/// `//` to end of line.
static SLASH_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//.*").unwrap());

/// Double or single quoted literal, backslash escapes.
static C_STYLE_LITERAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'"#).unwrap());

/// `--` to end of line.
static DASH_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"--.*").unwrap());

/// Single quoted literal, `''` is an embedded quote.
static SQL_LITERAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'(?:''|[^'])*'").unwrap());

/// Shortest `/* ... */`, across newlines.
static BLOCK_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// All fragments of `code`: single-line fragments in line order, followed by
/// block comments in source order.
pub fn tokenize(code: &str, grammar: Grammar) -> Vec<Fragment> {
    let mut fragments = tokenize_lines(code, grammar);
    fragments.extend(tokenize_blocks(code, grammar));
    fragments
}

/// Per-line pass. Within a line, comment matches come before literal matches.
pub fn tokenize_lines(code: &str, grammar: Grammar) -> Vec<Fragment> {
    let (comment, literal): (&Regex, &Regex) = match grammar {
        Grammar::CSharpLike | Grammar::JsLike => (&SLASH_COMMENT_REGEX, &C_STYLE_LITERAL_REGEX),
        Grammar::SqlLike => (&DASH_COMMENT_REGEX, &SQL_LITERAL_REGEX),
        Grammar::Unknown => return Vec::new(),
    };

    let mut fragments = Vec::new();
    for (idx, line) in LINE_BREAK_REGEX.split(code).enumerate() {
        let line_num = idx + 1;
        fragments.extend(
            comment
                .find_iter(line)
                .map(|m| Fragment::single_line(m.as_str(), line_num, FragmentKind::LineComment)),
        );
        fragments.extend(
            literal
                .find_iter(line)
                .map(|m| Fragment::single_line(m.as_str(), line_num, FragmentKind::StringLiteral)),
        );
    }
    fragments
}

/// Whole-text pass for `/* ... */`. Same rule for every supported grammar.
pub fn tokenize_blocks(code: &str, grammar: Grammar) -> Vec<Fragment> {
    if !grammar.is_supported() {
        return Vec::new();
    }

    BLOCK_COMMENT_REGEX
        .find_iter(code)
        .map(|m| Fragment::block(m.as_str(), line_at_offset(code, m.start())))
        .collect()
}

/// 1-based line number of a byte offset.
fn line_at_offset(code: &str, offset: usize) -> usize {
    code[..offset].matches('\n').count() + 1
}
