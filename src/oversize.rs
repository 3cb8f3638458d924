//! Oversize re-splitting.
//!
//! When coalesced fragments exceed the maximum length there is no natural
//! boundary left to use, so the text is cut at the last word boundary that
//! fits:
//!
//! ```text
//! max = 10
//!
//! "Have a good day?"
//!            ^ char 10 is 'd', mid-word
//!        ^ last whitespace before it
//!
//! emit "Have a", continue with "good day?"
//! ```
//!
//! Each cut hands its overlap to the rest of the text, and the loop repeats
//! until what is left fits. A run with no whitespace at all is hard-cut at
//! exactly `max` chars; that is the only place a word gets split.
//!
//! ## Carried Context
//!
//! Text that opens with an overlap must not produce a piece holding nothing
//! but that overlap. When the first new word does not fit beside the carried
//! prefix, the prefix is dropped and the round starts over from the new text:
//!
//! ```text
//! max = 10, carried "word."
//!
//! "word. Xxxxxxxxxxxxxxx."
//!       ^ cut would emit "word." again
//!
//! drop carry, continue with "Xxxxxxxxxxxxxxx."
//! ```
//!
//! ## Termination
//!
//! The next round's text is `overlap + text[cut..]`. Because the overlap is
//! always a proper suffix of the emitted piece (see [`overlap_text`]), every
//! round strictly shrinks the text. Dropping a carry shrinks it too.

use tracing::trace;

use crate::chars::{byte_offset, char_len};
use crate::overlap::overlap_text;

/// Result of [`split_oversize`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Oversize {
    /// Pieces of at most `max` chars, in order.
    pub chunks: Vec<String>,
    /// Trailing text of at most `max` chars, already prefixed with the
    /// overlap of the last piece. Not yet emitted.
    pub remainder: String,
}

/// Re-split `text` at word boundaries until the rest fits in `max_len`.
///
/// Every returned chunk is at most `max_len` chars. The remainder still
/// needs a chance to grow, so it is returned rather than emitted.
///
/// # Examples
///
/// ```rust
/// use semsplit::split_oversize;
///
/// let out = split_oversize("Have a good day?", 10, 0);
/// assert_eq!(out.chunks, vec!["Have a"]);
/// assert_eq!(out.remainder, "good day?");
/// ```
pub fn split_oversize(text: &str, max_len: usize, overlap: usize) -> Oversize {
    split_after_carry(text, 0, max_len, overlap)
}

/// [`split_oversize`] for text whose first `carried` bytes repeat the
/// previous chunk's overlap. `text` must not start with whitespace when
/// `carried > 0`.
pub(crate) fn split_after_carry(
    text: &str,
    mut carried: usize,
    max_len: usize,
    overlap: usize,
) -> Oversize {
    debug_assert!(max_len > 0, "max_len must be > 0");

    let mut chunks = Vec::new();
    let mut text = text.trim().to_string();

    while char_len(&text) > max_len {
        let cut = cut_point(&text, max_len);

        let fresh = text.get(carried..cut).unwrap_or_default();
        if carried > 0 && fresh.trim().is_empty() {
            trace!(carried, "next word does not fit beside the overlap, dropping it");
            text = text.get(carried..).unwrap_or_default().trim().to_string();
            carried = 0;
            continue;
        }

        let chunk = text[..cut].trim_end();
        let seed = overlap_text(chunk, overlap);

        trace!(
            cut,
            chunk_len = char_len(chunk),
            overlap_len = char_len(seed),
            "oversize cut"
        );

        let next = format!("{seed}{}", &text[cut..]);
        carried = seed.len();
        chunks.push(chunk.to_string());
        text = next.trim().to_string();
    }

    Oversize {
        chunks,
        remainder: text,
    }
}

/// Byte offset to cut `text` at, keeping the head within `max_len` chars.
///
/// `text` must be trimmed and longer than `max_len`.
fn cut_point(text: &str, max_len: usize) -> usize {
    let limit = byte_offset(text, max_len);

    if text[limit..].starts_with(char::is_whitespace) {
        return limit;
    }

    match text[..limit].rfind(char::is_whitespace) {
        Some(i) if i > 0 => i,
        _ => {
            trace!(limit, "no whitespace in window, hard cut");
            limit
        }
    }
}
