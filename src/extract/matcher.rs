//! Line-oriented proxy name matcher.
//!
//! Each line of the proxies block is matched against a single pattern
//! with three alternatives, tried in priority order:
//!
//! 1. single-quoted value: `name: 'HK 01'`
//! 2. double-quoted value: `name: "HK 01"`
//! 3. unquoted value up to the next `,` or `}`: `name: HK 01, ...`
//!
//! Only the first `name:` on a line is considered. Lines that do not
//! match are skipped rather than reported.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Pattern for the `name:` field. Capture groups 1..=3 map to
/// [`NameForm::SingleQuoted`], [`NameForm::DoubleQuoted`] and
/// [`NameForm::Unquoted`].
const NAME_PATTERN: &str = r#"name:\s*(?:'([^']*)'|"([^"]*)"|([^,}\n]+))"#;

/// Returns the compiled name pattern.
#[allow(clippy::expect_used)]
fn name_regex() -> &'static Regex {
    static NAME_RE: OnceLock<Regex> = OnceLock::new();
    NAME_RE.get_or_init(|| Regex::new(NAME_PATTERN).expect("valid regex"))
}

/// How the name value was written on its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameForm {
    /// `'...'`
    SingleQuoted,
    /// `"..."`
    DoubleQuoted,
    /// Bare value terminated by `,`, `}` or end of line.
    Unquoted,
}

impl NameForm {
    /// Capture group index for this form, in match priority order.
    const fn group(self) -> usize {
        match self {
            Self::SingleQuoted => 1,
            Self::DoubleQuoted => 2,
            Self::Unquoted => 3,
        }
    }

    const PRIORITY: [Self; 3] = [Self::SingleQuoted, Self::DoubleQuoted, Self::Unquoted];
}

/// Returns `true` for characters that end a line.
///
/// Covers `\n`, `\r`, vertical tab, form feed, the ASCII file/group/record
/// separators, NEL, and the Unicode line and paragraph separators.
const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits `text` into lines on any [`is_line_break`] character, treating
/// `\r\n` as a single break. A trailing break does not yield an empty
/// final line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// A name found on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// Trimmed name value.
    pub value: String,
    /// Which alternative matched.
    pub form: NameForm,
}

impl LineMatch {
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        NameForm::PRIORITY.into_iter().find_map(|form| {
            caps.get(form.group()).map(|m| Self {
                value: m.as_str().trim().to_string(),
                form,
            })
        })
    }
}

/// Best-effort extractor of proxy names from a proxies block.
///
/// # Examples
///
/// ```
/// use clash_groups::extract::NameExtractor;
///
/// let block = "\n  - { name: 'HK-01', server: x }\n  # name: 'skipped'\n  - { name: JP-03 }\n";
/// let names = NameExtractor::new().extract(block);
/// assert_eq!(names, vec!["HK-01", "JP-03"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NameExtractor;

impl NameExtractor {
    /// Creates a new extractor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Matches a single line.
    ///
    /// Returns `None` for blank lines, `#` comments, and lines without a
    /// `name:` field.
    #[must_use]
    pub fn match_line(&self, line: &str) -> Option<LineMatch> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }

        name_regex()
            .captures(trimmed)
            .and_then(|caps| LineMatch::from_captures(&caps))
    }

    /// Extracts every proxy name from `block`, in line order.
    ///
    /// Never fails; an empty vector means nothing matched.
    #[must_use]
    pub fn extract(&self, block: &str) -> Vec<String> {
        let mut names = Vec::new();
        let mut skipped = 0usize;

        for (line_no, line) in split_lines(block).into_iter().enumerate() {
            if let Some(found) = self.match_line(line) {
                tracing::trace!(line = line_no, form = ?found.form, name = %found.value, "matched");
                names.push(found.value);
            } else {
                skipped += 1;
            }
        }

        tracing::debug!(names = names.len(), skipped, "extracted proxy names");
        names
    }
}

/// Extracts proxy names from a proxies block.
#[must_use]
pub fn extract_names(block: &str) -> Vec<String> {
    NameExtractor::new().extract(block)
}
