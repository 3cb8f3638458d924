//! The configured splitter.
//!
//! Wires the two stages together:
//!
//! ```text
//! text ──► BoundaryDetector ──► fragments ──► assemble ──► chunks
//!                                                            │
//!                                            normalize_whitespace (optional)
//! ```
//!
//! [`SplitOptions`] is the plain configuration value; [`TextSplitter`] is
//! that configuration validated once and ready to reuse.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::assembler::assemble;
use crate::boundary::{BoundaryDetector, Pattern, Preset};
use crate::bounds::ChunkBounds;
use crate::normalize::normalize_whitespace;
use crate::Result;

/// Splitting options.
///
/// Every field has a default; set only what you need:
///
/// ```rust
/// use semsplit::{Preset, SplitOptions};
///
/// let options = SplitOptions::default()
///     .with_max_length(500)
///     .with_overlap(50)
///     .with_preset(Preset::Paragraph);
///
/// assert_eq!(options.min_length, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplitOptions {
    /// Minimum accumulated length (chars) before a chunk may be emitted.
    pub min_length: usize,
    /// Hard upper bound on chunk length (chars).
    pub max_length: usize,
    /// Chars of trailing context copied into the start of the next chunk.
    pub overlap: usize,
    /// Built-in boundary strategy.
    pub preset: Preset,
    /// Separator regex that replaces `preset` entirely when set.
    pub pattern: Option<String>,
    /// Collapse whitespace runs in the output chunks.
    pub normalize_whitespace: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            min_length: 0,
            max_length: 5000,
            overlap: 0,
            preset: Preset::Sentence,
            pattern: None,
            normalize_whitespace: false,
        }
    }
}

impl SplitOptions {
    /// Set the minimum chunk length.
    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Set the maximum chunk length.
    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set the overlap between consecutive chunks.
    #[must_use]
    pub fn with_overlap(mut self, overlap: usize) -> Self {
        self.overlap = overlap;
        self
    }

    /// Select a built-in boundary strategy.
    #[must_use]
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }

    /// Split on a caller-supplied separator pattern instead of a preset.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Collapse whitespace in the output.
    #[must_use]
    pub fn with_normalize_whitespace(mut self, normalize: bool) -> Self {
        self.normalize_whitespace = normalize;
        self
    }
}

/// A validated, reusable splitter.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of calls from any number of threads.
///
/// ## Example
///
/// ```rust
/// use semsplit::{SplitOptions, TextSplitter};
///
/// let splitter = TextSplitter::new(&SplitOptions::default()).unwrap();
/// let chunks = splitter.split("First sentence. Second one! Third?");
///
/// assert_eq!(chunks, vec!["First sentence.", " Second one!", " Third?"]);
/// ```
#[derive(Clone)]
pub struct TextSplitter {
    bounds: ChunkBounds,
    overlap: usize,
    detector: Arc<dyn BoundaryDetector>,
    normalize_whitespace: bool,
}

impl TextSplitter {
    /// Validate `options` and build a splitter.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration)
    ///   if `max_length == 0` or `min_length > max_length`
    /// - [`Error::InvalidPattern`](crate::Error::InvalidPattern) if `pattern`
    ///   does not compile
    pub fn new(options: &SplitOptions) -> Result<Self> {
        let bounds = ChunkBounds::new(options.min_length, options.max_length)?;

        let detector: Arc<dyn BoundaryDetector> = match &options.pattern {
            Some(pattern) => Arc::new(Pattern::new(pattern)?),
            None => Arc::new(options.preset),
        };

        Ok(Self {
            bounds,
            overlap: options.overlap,
            detector,
            normalize_whitespace: options.normalize_whitespace,
        })
    }

    /// Replace the boundary strategy.
    ///
    /// ```rust
    /// use semsplit::{SplitOptions, TextSplitter, UnicodeSentences};
    ///
    /// let splitter = TextSplitter::new(&SplitOptions::default())
    ///     .unwrap()
    ///     .with_detector(UnicodeSentences);
    /// assert_eq!(splitter.split("One. Two.").len(), 2);
    /// ```
    #[must_use]
    pub fn with_detector(mut self, detector: impl BoundaryDetector + 'static) -> Self {
        self.detector = Arc::new(detector);
        self
    }

    /// The length bounds chunks are assembled against.
    #[must_use]
    pub const fn bounds(&self) -> ChunkBounds {
        self.bounds
    }

    /// Split `text` into chunks.
    ///
    /// Every chunk is at most `max_length` chars. Empty or blank text yields
    /// no chunks.
    pub fn split(&self, text: &str) -> Vec<String> {
        let fragments = self.detector.fragments(text);
        let fragment_count = fragments.len();

        let mut chunks = assemble(fragments, self.bounds, self.overlap);
        if self.normalize_whitespace {
            for chunk in &mut chunks {
                *chunk = normalize_whitespace(chunk);
            }
        }

        debug!(
            text_len = text.len(),
            fragments = fragment_count,
            chunks = chunks.len(),
            min = self.bounds.min(),
            max = self.bounds.max(),
            overlap = self.overlap,
            "split text"
        );
        chunks
    }
}

impl fmt::Debug for TextSplitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextSplitter")
            .field("bounds", &self.bounds)
            .field("overlap", &self.overlap)
            .field("normalize_whitespace", &self.normalize_whitespace)
            .finish_non_exhaustive()
    }
}

/// Split `text` with one-off `options`.
///
/// Validates the options first; nothing is split if they are rejected.
///
/// # Errors
///
/// Same as [`TextSplitter::new`].
///
/// # Examples
///
/// ```rust
/// use semsplit::{split, SplitOptions};
///
/// let chunks = split("Hello. World.", &SplitOptions::default()).unwrap();
/// assert_eq!(chunks.len(), 2);
///
/// let bad = SplitOptions::default().with_min_length(10).with_max_length(5);
/// assert!(split("Hello.", &bad).is_err());
/// ```
pub fn split(text: &str, options: &SplitOptions) -> Result<Vec<String>> {
    Ok(TextSplitter::new(options)?.split(text))
}
