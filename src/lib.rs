// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod extract;
pub mod io;
pub mod lexicon;

// Re-export commonly used types
pub use crate::analysis::{
    aggregate_document, analyze_text, split_sentences, standardize_corpus, FeatureScorer,
};

pub use crate::core::{
    CorpusMatrix, CorpusReport, DocumentAnalysis, DocumentDiagnostics, DocumentReport,
    MatrixRow, RiskDimension, RiskVector,
};

pub use crate::config::RhetmapConfig;
pub use crate::errors::RhetmapError;
pub use crate::extract::{PlainTextExtractor, TextExtractor};
pub use crate::io::output::{create_writer, OutputWriter};
pub use crate::io::risk_log::RiskLog;
pub use crate::lexicon::{LexiconRegistry, MarkerExtensions, MarkerGroup, MarkerTier};
