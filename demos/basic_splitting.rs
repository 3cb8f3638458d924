//! Basic Text Splitting
//!
//! Split a short document into bounded, overlapping chunks.
//!
//! ```bash
//! RUST_LOG=semsplit=trace cargo run --example basic_splitting
//! ```

use semsplit::{Preset, SplitOptions, TextSplitter};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), semsplit::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let document = "Machine learning models learn patterns from data. \
        They generalize these patterns to make predictions. \
        This is fundamentally different from traditional programming. \
        Deep learning extends this with multiple hidden layers. \
        Each layer learns increasingly abstract representations.";

    let options = SplitOptions::default()
        .with_preset(Preset::Sentence)
        .with_min_length(60)
        .with_max_length(120)
        .with_overlap(20);
    let splitter = TextSplitter::new(&options)?;
    let chunks = splitter.split(document);

    println!("Document: {} chars", document.chars().count());
    println!("Chunks: {}\n", chunks.len());

    for (i, chunk) in chunks.iter().enumerate() {
        println!("[{}] {} chars: \"{}\"", i, chunk.chars().count(), chunk);
    }

    Ok(())
}
