//! Char-indexed helpers.
//!
//! Chunk lengths are measured in `char`s, while slicing needs byte offsets.

/// Number of chars in `text`.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the char at index `n`, or `text.len()` past the end.
pub(crate) fn byte_offset(text: &str, n: usize) -> usize {
    text.char_indices().nth(n).map_or(text.len(), |(i, _)| i)
}

/// Byte offset just past the last whitespace char in `text`, or 0.
pub(crate) fn after_last_whitespace(text: &str) -> usize {
    text.char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_chars_not_bytes() {
        assert_eq!(char_len("日本語"), 3);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_byte_offset() {
        let text = "a日b";
        assert_eq!(byte_offset(text, 0), 0);
        assert_eq!(byte_offset(text, 1), 1);
        assert_eq!(byte_offset(text, 2), 4);
        assert_eq!(byte_offset(text, 3), 5);
        assert_eq!(byte_offset(text, 10), 5);
    }

    #[test]
    fn test_after_last_whitespace() {
        assert_eq!(after_last_whitespace("one two"), 4);
        assert_eq!(after_last_whitespace("one\u{3000}two"), 6);
        assert_eq!(after_last_whitespace("word"), 0);
    }
}
