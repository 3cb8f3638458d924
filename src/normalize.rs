//! Whitespace normalization.

/// Collapse every whitespace run to a single space and trim both ends.
///
/// Applied after chunking, so it never moves a chunk boundary.
///
/// ```rust
/// use semsplit::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  a\n\n b\t c "), "a b c");
/// ```
pub fn normalize_whitespace(chunk: &str) -> String {
    chunk.split_whitespace().collect::<Vec<_>>().join(" ")
}
