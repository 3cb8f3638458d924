//! Overlap extraction.
//!
//! Each chunk hands a little of its tail to the next one so that a
//! statement straddling the cut is still readable on either side:
//!
//! ```text
//! chunk i:    "This is the first sentence."
//! overlap 5:                       "ence."      <- trailing 5 chars
//! widened:                     "sentence."      <- back to the word start
//! chunk i+1:  "sentence. This is the second,"
//! ```
//!
//! The slice is widened backward rather than forward so a short overlap
//! request still carries a whole word. When the partial word is also the
//! first word of the chunk, widening would repeat the whole chunk, so the
//! slice moves forward to the next word instead:
//!
//! ```text
//! chunk:      "Three four"
//! overlap 6:      "e four"
//! narrowed:         "four"
//! ```
//!
//! Only a chunk with no whitespace in its tail keeps the raw trailing slice.
//! Either way the overlap is strictly shorter than its source, which the
//! oversize loop relies on to make progress.

use crate::chars::{after_last_whitespace, byte_offset, char_len};

/// Word-aligned trailing context of `chunk`, at most `overlap` chars plus
/// the rest of the word the slice would otherwise start in.
///
/// Returns `""` when `overlap == 0` or `chunk` is empty. An `overlap` that
/// is not smaller than the chunk is clamped to half its length.
///
/// # Examples
///
/// ```rust
/// use semsplit::overlap_text;
///
/// assert_eq!(overlap_text("This is the first sentence.", 5), "sentence.");
/// assert_eq!(overlap_text("a final word", 4), "word");
/// assert_eq!(overlap_text("anything", 0), "");
/// ```
pub fn overlap_text(chunk: &str, overlap: usize) -> &str {
    let len = char_len(chunk);
    if overlap == 0 || len == 0 {
        return "";
    }

    let overlap = if overlap >= len { len / 2 } else { overlap };
    if overlap == 0 {
        return "";
    }

    let start = byte_offset(chunk, len - overlap);
    let (head, tail) = chunk.split_at(start);
    let mid_word = !tail.starts_with(char::is_whitespace)
        && head.ends_with(|c: char| !c.is_whitespace());

    if !mid_word {
        return tail.trim();
    }

    match after_last_whitespace(head) {
        0 => next_word(tail).unwrap_or(tail).trim(),
        word_start => chunk[word_start..].trim(),
    }
}

/// `tail` from its second word on, if it has one.
fn next_word(tail: &str) -> Option<&str> {
    let rest = &tail[tail.find(char::is_whitespace)?..];
    (!rest.trim().is_empty()).then_some(rest)
}
