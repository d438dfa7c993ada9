//! The lexical scoring pipeline: segmentation, per-sentence feature
//! scoring, document aggregation, and corpus normalization.

pub mod aggregate;
pub mod normalize;
pub mod scorer;
pub mod segmenter;

use crate::core::{DocumentAnalysis, RiskVector};
use crate::lexicon::LexiconRegistry;

pub use aggregate::aggregate_document;
pub use normalize::standardize_corpus;
pub use scorer::FeatureScorer;
pub use segmenter::split_sentences;

/// Run the full per-document pipeline over one block of raw text.
///
/// Empty or unreadable text (no sentences) yields an all-zero vector with a
/// zero sentence count; it is not an error.
pub fn analyze_text(text: &str, registry: &LexiconRegistry) -> DocumentAnalysis {
    let sentences = split_sentences(text);
    let scorer = FeatureScorer::new(registry);
    let vectors: Vec<RiskVector> = sentences.iter().map(|s| scorer.score(s)).collect();
    aggregate_document(&vectors)
}
