#![allow(clippy::needless_range_loop)]
//! End-to-end scenarios for text splitting.
//!
//! Fixed inputs with known chunk counts and contents, plus the configuration
//! errors that must surface before any text is processed.

use semsplit::{overlap_text, split, Error, Preset, SplitOptions, TextSplitter, UnicodeSentences};

const SHORT: &str = "Hello World.\nThis is\n a test sentence! Have a good day? Haha. Haha";

const FEW_SENTENCES: &str =
    "This is the first sentence. This is the second, slightly longer sentence. And a final short one.";

const MARKDOWN: &str = "# Artificial Intelligence\n\
Artificial intelligence is the capability of machines to perform tasks.\n\
\n\
## History\n\
The field was founded in 1956. Progress came in waves.\n\
\n\
## Goals\n\
Reasoning, planning and learning are central goals.\n\
\n\
### Reasoning\n\
Early systems imitated step-by-step deduction.\n\
\n\
## Applications\n\
Search engines, recommendation systems and assistants.";

fn char_len(s: &str) -> usize {
    s.chars().count()
}

// =============================================================================
// Sentence preset
// =============================================================================

#[test]
fn default_options_one_chunk_per_sentence() {
    let chunks = split(SHORT, &SplitOptions::default()).unwrap();
    assert_eq!(chunks.len(), 5);
    assert_eq!(chunks.concat(), SHORT);
}

#[test]
fn low_max_length_forces_word_splits() {
    let options = SplitOptions::default()
        .with_min_length(5)
        .with_max_length(10);
    let chunks = split(SHORT, &options).unwrap();

    // Eight is the fewest word-aligned pieces of <= 10 chars for this text.
    assert_eq!(chunks.len(), 8);
    assert_eq!(chunks[7], "Haha. Haha");
    for chunk in &chunks {
        assert!(char_len(chunk) <= 10, "{chunk:?}");
    }

    let words: Vec<&str> = chunks.iter().flat_map(|c| c.split_whitespace()).collect();
    assert_eq!(words, SHORT.split_whitespace().collect::<Vec<_>>());
}

#[test]
fn min_length_coalesces_short_sentences() {
    let options = SplitOptions::default()
        .with_min_length(10)
        .with_preset(Preset::Sentence);
    let chunks = split(SHORT, &options).unwrap();
    assert_eq!(chunks.len(), 4);
    assert_eq!(chunks[3], " Haha. Haha");
    assert_eq!(chunks.concat(), SHORT);
}

#[test]
fn overlap_with_small_max_length() {
    let options = SplitOptions::default()
        .with_preset(Preset::Sentence)
        .with_max_length(30)
        .with_overlap(5);
    let chunks = split(FEW_SENTENCES, &options).unwrap();

    assert_eq!(
        chunks,
        vec![
            "This is the first sentence.",
            "sentence. This is the second,",
            "second, slightly longer",
            "longer sentence. And a final",
            "final short one.",
        ]
    );
    for chunk in &chunks {
        assert!(char_len(chunk) <= 30);
    }
}

#[test]
fn overlap_starts_on_a_whole_word() {
    let options = SplitOptions::default()
        .with_max_length(12)
        .with_overlap(6);
    let chunks = split("One two. Three four five six seven.", &options).unwrap();

    assert_eq!(
        chunks,
        vec!["One two.", "two. Three", "Three four", "four five", "five six", "six seven."]
    );
}

#[test]
fn overlap_never_fills_a_chunk_alone() {
    let options = SplitOptions::default()
        .with_max_length(10)
        .with_overlap(5);
    let chunks = split("Hi word. Xxxxxxxxxxxxxxxxxxxxxx.", &options).unwrap();

    assert_eq!(chunks[0], "Hi word.");
    assert_eq!(chunks[1], "Xxxxxxxxxx");
    for pair in chunks.windows(2) {
        let carried = overlap_text(&pair[0], 5);
        let fresh = pair[1].strip_prefix(carried).unwrap_or(&pair[1]);
        assert!(!fresh.trim().is_empty(), "{chunks:?}");
    }
}

#[test]
fn overlap_with_normalized_output() {
    let options = SplitOptions::default()
        .with_max_length(30)
        .with_overlap(5)
        .with_normalize_whitespace(true);
    let chunks = split(FEW_SENTENCES, &options).unwrap();
    assert_eq!(chunks[1], "sentence. This is the second,");
    assert_eq!(chunks[3], "longer sentence. And a final");
}

// =============================================================================
// Paragraph and markdown presets
// =============================================================================

#[test]
fn markdown_splits_per_heading() {
    let options = SplitOptions::default().with_preset(Preset::Markdown);
    let chunks = split(MARKDOWN, &options).unwrap();

    assert_eq!(chunks.len(), 5);
    assert!(chunks[0].starts_with("# Artificial Intelligence"));
    assert!(chunks[1].trim_start().starts_with("## History"));
    assert!(chunks[3].trim_start().starts_with("### Reasoning"));
    assert_eq!(chunks.concat(), MARKDOWN);
}

#[test]
fn markdown_with_overlap_keeps_count() {
    let plain = SplitOptions::default().with_preset(Preset::Markdown);
    let overlapped = plain.clone().with_overlap(20);

    let without = split(MARKDOWN, &plain).unwrap();
    let with = split(MARKDOWN, &overlapped).unwrap();

    assert_eq!(without.len(), with.len());
    for i in 1..with.len() {
        assert!(with[i].ends_with(without[i].as_str()));
        assert!(with[i].len() > without[i].len());
    }
}

#[test]
fn paragraph_splits_on_blank_lines() {
    let text = "First paragraph line.\n\nSecond paragraph starts here.\nIt continues.\n\nThird.";
    let options = SplitOptions::default().with_preset(Preset::Paragraph);
    let chunks = split(text, &options).unwrap();

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks.concat(), text);
    assert!(chunks[1].contains("It continues."));
}

#[test]
fn preset_by_name() {
    let preset: Preset = "paragraph".parse().unwrap();
    let options = SplitOptions::default().with_preset(preset);
    assert!(TextSplitter::new(&options).is_ok());
}

// =============================================================================
// Custom strategies
// =============================================================================

#[test]
fn custom_pattern_consumes_separators() {
    let options = SplitOptions::default().with_pattern(r"[.]");
    let chunks = split("Item 1. Item 2. Item 3. Item 4", &options).unwrap();
    assert_eq!(chunks, vec!["Item 1", " Item 2", " Item 3", " Item 4"]);
}

#[test]
fn unicode_sentences_detector() {
    let splitter = TextSplitter::new(&SplitOptions::default().with_min_length(10))
        .unwrap()
        .with_detector(UnicodeSentences);
    let chunks = splitter.split("Short. Tiny. This sentence is long enough on its own.");
    assert_eq!(chunks.len(), 2);
}

// =============================================================================
// Configuration errors
// =============================================================================

#[test]
fn min_greater_than_max_rejected() {
    let options = SplitOptions::default()
        .with_min_length(10)
        .with_max_length(5);
    let err = split("Anything at all.", &options).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration(_)));
}

#[test]
fn unknown_preset_rejected() {
    let err = "chapter".parse::<Preset>().unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration(_)));
}

#[test]
fn invalid_pattern_rejected() {
    let err = split("text", &SplitOptions::default().with_pattern("(")).unwrap_err();
    assert!(matches!(err, Error::InvalidPattern(_)));
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn long_unbroken_run_is_hard_cut() {
    let text = "a".repeat(1000);
    let chunks = split(&text, &SplitOptions::default().with_max_length(100)).unwrap();
    assert_eq!(chunks.len(), 10);
    assert!(chunks.iter().all(|c| char_len(c) == 100));
}

#[test]
fn multibyte_text_measured_in_chars() {
    let text = "日本語のテキスト です。 分割 されます。 Ünïcödé wörds hérè.";
    let chunks = split(text, &SplitOptions::default().with_max_length(8)).unwrap();
    for chunk in &chunks {
        assert!(char_len(chunk) <= 8, "{chunk:?}");
    }
    assert!(chunks.iter().any(|c| c.contains("日本語")));
}
