//! # semsplit
//!
//! Boundary-aware text splitting for embedding and indexing pipelines.
//!
//! ## The Problem
//!
//! Embedding models take bounded input. Documents don't fit. Cutting every N
//! characters is easy but produces pieces that start and end mid-thought. Cutting
//! at sentences is better, but sentences come in every size: some chunks end
//! up three characters long, others three thousand.
//!
//! What you usually want is:
//!
//! - cut where the text itself has a seam (sentence, paragraph, heading)
//! - glue small pieces together until they are worth embedding (`min_length`)
//! - never exceed the model limit (`max_length`), cutting at a word if needed
//! - repeat a little context across each cut (`overlap`)
//!
//! ## Two Stages
//!
//! ```text
//! text ──► boundary detection ──► fragments ──► assembly ──► chunks
//! ```
//!
//! 1. **Boundary detection** ([`BoundaryDetector`]) cuts the text into small
//!    fragments. The built-in [`Preset`]s use zero-width boundaries, so the
//!    fragments concatenate back to the input exactly.
//! 2. **Assembly** ([`assemble`]) coalesces fragments until they reach
//!    `min_length`, re-splits anything over `max_length` at the last word
//!    boundary that fits ([`split_oversize`]), and seeds each chunk with the
//!    word-aligned tail of the previous one ([`overlap_text`]).
//!
//! ## Example
//!
//! ```text
//! "This is the first sentence. This is the second, slightly longer
//!  sentence. And a final short one."
//!
//! max_length = 30, overlap = 5
//!
//! [0] "This is the first sentence."
//! [1] "sentence. This is the second,"
//! [2] "second, slightly longer"
//! [3] "longer sentence. And a final"
//! [4] "final short one."
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use semsplit::{split, Preset, SplitOptions, TextSplitter};
//!
//! let text = "The quick brown fox jumps over the lazy dog. \
//!             Pack my box with five dozen liquor jugs.";
//!
//! // One-off call with defaults: one chunk per sentence
//! let chunks = split(text, &SplitOptions::default()).unwrap();
//! assert_eq!(chunks.len(), 2);
//!
//! // Reusable splitter with tighter bounds
//! let splitter = TextSplitter::new(
//!     &SplitOptions::default()
//!         .with_max_length(30)
//!         .with_overlap(10)
//!         .with_preset(Preset::Sentence),
//! )
//! .unwrap();
//!
//! for chunk in splitter.split(text) {
//!     assert!(chunk.chars().count() <= 30);
//! }
//! ```
//!
//! ## Lengths
//!
//! All lengths are `char` counts, not bytes and not graphemes.

mod assembler;
mod boundary;
mod bounds;
mod chars;
mod error;
mod normalize;
mod overlap;
mod oversize;
mod splitter;

pub use assembler::assemble;
pub use boundary::{BoundaryDetector, Pattern, Preset, UnicodeSentences};
pub use bounds::ChunkBounds;
pub use error::{Error, Result};
pub use normalize::normalize_whitespace;
pub use overlap::overlap_text;
pub use oversize::{split_oversize, Oversize};
pub use splitter::{split, SplitOptions, TextSplitter};
