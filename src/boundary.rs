//! Boundary detection.
//!
//! The first stage of splitting: cut the text into small ordered fragments
//! at semantic boundaries. The assembler never looks inside a fragment; it
//! only coalesces and re-splits them.
//!
//! ## Presets
//!
//! The built-in presets place zero-width boundaries, so fragments partition
//! the input and concatenate back to it exactly:
//!
//! ```text
//! sentence:   "Hello World.|\nThis is fine!| Next?| Done."
//! paragraph:  "Intro.\n|\nSecond para.\n\n|# Heading\nBody."
//! markdown:   "# Title\nText.|\n\n## Part\nMore."
//! ```
//!
//! - **sentence**: after `.`, `!` or `?` when the next char is whitespace or
//!   an uppercase letter.
//! - **paragraph**: before a newline run leading into an uppercase letter, or
//!   before `#`, once a line of text has ended.
//! - **markdown**: before the whitespace leading into a heading marker
//!   (`#`s then whitespace) or a line-initial bold marker (`**`).
//!
//! The `regex` crate has no lookaround, so each preset matches the
//! surrounding context and then picks the boundary position inside it.
//!
//! ## Custom Strategies
//!
//! Anything implementing [`BoundaryDetector`] can replace the presets: a
//! caller [`Pattern`] (consuming separator, like `str::split`), UAX #29
//! sentences via [`UnicodeSentences`], or a plain function.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::{Error, Result};

static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?][\sA-Z]").expect("sentence pattern is valid"));

static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+[A-Z]|#+").expect("paragraph pattern is valid"));

static MARKDOWN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+(?:#+|\*\*)").expect("markdown pattern is valid"));

/// A strategy that cuts text into ordered fragments.
///
/// Implementations should return fragments in source order. Blank fragments
/// are allowed; the assembler skips them.
///
/// ```rust
/// use semsplit::BoundaryDetector;
///
/// fn lines(text: &str) -> Vec<&str> {
///     text.split_inclusive('\n').collect()
/// }
///
/// assert_eq!(lines.fragments("a\nb"), vec!["a\n", "b"]);
/// ```
pub trait BoundaryDetector: Send + Sync {
    /// Split `text` into fragments.
    fn fragments<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

impl<F> BoundaryDetector for F
where
    F: Fn(&str) -> Vec<&str> + Send + Sync,
{
    fn fragments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self(text)
    }
}

/// Built-in boundary strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Preset {
    /// Split after terminal punctuation.
    #[default]
    Sentence,
    /// Split at blank lines and headings.
    Paragraph,
    /// Split before markdown headings.
    Markdown,
}

impl Preset {
    /// The preset's name as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sentence => "sentence",
            Self::Paragraph => "paragraph",
            Self::Markdown => "markdown",
        }
    }

    /// Zero-width boundary positions (byte offsets), ascending.
    fn boundaries(self, text: &str) -> Vec<usize> {
        match self {
            Self::Sentence => sentence_boundaries(text),
            Self::Paragraph => paragraph_boundaries(text),
            Self::Markdown => markdown_boundaries(text),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        [Self::Sentence, Self::Paragraph, Self::Markdown]
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::InvalidConfiguration(format!(
                    "unknown boundary preset `{s}` (expected sentence, paragraph or markdown)"
                ))
            })
    }
}

impl BoundaryDetector for Preset {
    fn fragments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        partition(text, &self.boundaries(text))
    }
}

/// A caller-supplied separator pattern.
///
/// Matches are consumed: `Pattern::new("[;]")` turns `"a; b"` into
/// `["a", " b"]`.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile a separator pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// The source pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

impl BoundaryDetector for Pattern {
    fn fragments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex.split(text).collect()
    }
}

/// Sentence boundaries per Unicode Standard Annex #29.
///
/// Handles abbreviations and decimals better than the `sentence` preset, at
/// the cost of being less predictable on unusual punctuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentences;

impl BoundaryDetector for UnicodeSentences {
    fn fragments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split_sentence_bounds().collect()
    }
}

/// Slice `text` at the given ascending byte offsets.
fn partition<'t>(text: &'t str, boundaries: &[usize]) -> Vec<&'t str> {
    let mut fragments = Vec::with_capacity(boundaries.len() + 1);
    let mut start = 0;

    for &at in boundaries {
        if at > start && at < text.len() {
            fragments.push(&text[start..at]);
            start = at;
        }
    }

    if start < text.len() {
        fragments.push(&text[start..]);
    }

    fragments
}

fn sentence_boundaries(text: &str) -> Vec<usize> {
    // The punctuation is ASCII, so the boundary is one byte past the match start.
    SENTENCE.find_iter(text).map(|m| m.start() + 1).collect()
}

fn paragraph_boundaries(text: &str) -> Vec<usize> {
    let mut boundaries = Vec::new();

    for m in PARAGRAPH.find_iter(text) {
        let found = if m.as_str().starts_with('\n') {
            // Last byte of the match is the uppercase letter; the rest are newlines.
            (m.start()..m.end() - 1).find(|&at| ends_line(&text[..at]))
        } else {
            Some(m.start()).filter(|&at| ends_line(&text[..at]))
        };
        boundaries.extend(found);
    }

    boundaries
}

/// True when `head` ends in whitespace that follows some non-newline char,
/// i.e. a line of text has just been closed.
fn ends_line(head: &str) -> bool {
    let mut rev = head.chars().rev();
    match rev.next() {
        Some(c) if c.is_whitespace() => rev.any(|c| c != '\n'),
        _ => false,
    }
}

fn markdown_boundaries(text: &str) -> Vec<usize> {
    MARKDOWN
        .find_iter(text)
        .filter(|m| {
            let next = text[m.end()..].chars().next();
            if m.as_str().ends_with('#') {
                next.is_some_and(char::is_whitespace)
            } else {
                m.as_str().contains('\n') && next.is_some_and(|c| !c.is_whitespace())
            }
        })
        .map(|m| m.start())
        .collect()
}
