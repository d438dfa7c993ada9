//! Document-to-text extraction boundary.
//!
//! The core pipeline consumes plain text; everything about reading a source
//! format lives behind [`TextExtractor`]. Extraction failure is an error of
//! this boundary, not of the pipeline — callers running a batch degrade a
//! failed document to empty text so the rest of the corpus proceeds.

use std::fs;
use std::path::Path;

use crate::errors::RhetmapError;

/// Turns a document locator into its full text as a single string.
pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String, RhetmapError>;
}

/// Extractor for plain UTF-8 text documents.
///
/// Invalid byte sequences are replaced rather than failing the document;
/// correspondence exports are frequently messy around smart quotes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String, RhetmapError> {
        let bytes = fs::read(path).map_err(|source| RhetmapError::Extraction {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
