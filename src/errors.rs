//! Typed errors for rhetmap operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library.
///
/// Extraction failures are recoverable at the batch level: the analyze
/// command degrades an unreadable document to empty text (a zero-sentence
/// document) instead of aborting the corpus run. `EmptyCorpus` is a caller
/// error and is never degraded.
#[derive(Debug, Error)]
pub enum RhetmapError {
    /// A document could not be read or decoded by the extractor.
    #[error("failed to extract text from {path}: {source}")]
    Extraction {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The corpus normalizer was handed an empty batch.
    #[error("corpus batch is empty; at least one document vector is required")]
    EmptyCorpus,

    /// The configuration file was unreadable or malformed.
    #[error("invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Report or log writing failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
