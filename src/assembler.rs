//! Chunk assembly.
//!
//! Turns the fragment sequence from boundary detection into the final
//! chunks. One pass, one piece of state:
//!
//! ```text
//! fragment ──► Accumulator ──► fits(len)?
//!                                 │
//!               Less ◄────────────┼──────────► Greater
//!          (keep going)           │          split_oversize
//!                               Equal         emit pieces,
//!                           emit buffer,      carry remainder
//!                           carry overlap
//! ```
//!
//! ## Length Measurement
//!
//! The accumulated length is the char count of the carried text and the
//! fragments, joined by a single space only where neither side of the seam
//! is already whitespace. Preset fragments bring their own whitespace, so
//! coalescing them loses nothing. The carry counts, so an emitted chunk is
//! exactly what was measured and never exceeds the maximum.
//!
//! ## Carry
//!
//! What the next chunk starts from:
//!
//! - after an in-range emission: the overlap of that chunk
//! - after an oversize split: the remainder, which already begins with the
//!   overlap of the last piece
//!
//! Overlap alone is context, not content, so it is dropped at end of input
//! if no fragment followed it, and dropped before a word too long to sit
//! beside it. A remainder is content and is always flushed.

use std::cmp::Ordering;

use tracing::trace;

use crate::bounds::ChunkBounds;
use crate::chars::char_len;
use crate::overlap::overlap_text;
use crate::oversize::split_after_carry;

/// Text being coalesced toward the next chunk.
#[derive(Debug, Default)]
struct Accumulator {
    buffer: String,
    len: usize,
    /// Bytes at the front of `buffer` repeated from the previous chunk.
    carried: usize,
    has_content: bool,
}

impl Accumulator {
    fn push(&mut self, fragment: &str) {
        let separated = self.buffer.ends_with(char::is_whitespace)
            || fragment.starts_with(char::is_whitespace);
        if !self.buffer.is_empty() && !separated {
            self.buffer.push(' ');
            self.len += 1;
        }
        self.buffer.push_str(fragment);
        self.len += char_len(fragment);
        self.has_content = true;
    }

    /// Start over from the overlap of the chunk just emitted.
    fn reset_with_overlap(&mut self, overlap: &str) {
        self.buffer.clear();
        self.buffer.push_str(overlap);
        self.len = char_len(overlap);
        self.carried = overlap.len();
        self.has_content = false;
    }

    /// Start over from the leftover of an oversize split.
    fn reset_with_remainder(&mut self, remainder: String) {
        self.len = char_len(&remainder);
        self.carried = 0;
        self.has_content = !remainder.is_empty();
        self.buffer = remainder;
    }
}

/// Coalesces fragments into bounded chunks.
#[derive(Debug)]
pub(crate) struct Assembler {
    bounds: ChunkBounds,
    overlap: usize,
    acc: Accumulator,
    chunks: Vec<String>,
}

impl Assembler {
    pub(crate) fn new(bounds: ChunkBounds, overlap: usize) -> Self {
        Self {
            bounds,
            overlap,
            acc: Accumulator::default(),
            chunks: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, fragment: &str) {
        if fragment.trim().is_empty() {
            return;
        }

        self.acc.push(fragment);

        match self.bounds.fits(self.acc.len) {
            Ordering::Less => {}
            Ordering::Equal => self.emit_in_range(),
            Ordering::Greater => self.emit_oversize(),
        }
    }

    /// Flush whatever is left and return all chunks.
    pub(crate) fn finish(mut self) -> Vec<String> {
        if self.acc.has_content {
            trace!(len = self.acc.len, "flushing final chunk");
            debug_assert!(self.acc.len <= self.bounds.max(), "push re-splits oversize text");
            self.chunks.push(self.acc.buffer);
        }
        self.chunks
    }

    fn emit_in_range(&mut self) {
        let chunk = std::mem::take(&mut self.acc.buffer);
        self.acc.reset_with_overlap(overlap_text(&chunk, self.overlap));
        self.chunks.push(chunk);
    }

    fn emit_oversize(&mut self) {
        trace!(
            len = self.acc.len,
            max = self.bounds.max(),
            "accumulated text exceeds max, re-splitting"
        );
        let out = split_after_carry(
            &self.acc.buffer,
            self.acc.carried,
            self.bounds.max(),
            self.overlap,
        );
        self.chunks.extend(out.chunks);
        self.acc.reset_with_remainder(out.remainder);
    }
}

/// Assemble `fragments` into chunks within `bounds`, carrying `overlap`
/// chars of context from each chunk into the next.
///
/// Blank fragments are skipped. Every chunk is at most `bounds.max()` chars.
///
/// # Examples
///
/// ```rust
/// use semsplit::{assemble, ChunkBounds};
///
/// let fragments = ["Hi.", " Ok.", " This one is long enough."];
/// let bounds = ChunkBounds::new(7, 40).unwrap();
/// let chunks = assemble(fragments, bounds, 0);
///
/// assert_eq!(chunks, vec!["Hi. Ok.", " This one is long enough."]);
/// ```
pub fn assemble<'t, I>(fragments: I, bounds: ChunkBounds, overlap: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'t str>,
{
    let mut assembler = Assembler::new(bounds, overlap);
    for fragment in fragments {
        assembler.push(fragment);
    }
    assembler.finish()
}
