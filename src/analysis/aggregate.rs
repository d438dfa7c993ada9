//! Document-level aggregation of sentence scores.

use crate::core::{DocumentAnalysis, DocumentDiagnostics, RiskDimension, RiskVector};

/// Reduce a document's ordered sentence vectors to their element-wise mean,
/// with coverage diagnostics.
///
/// A document with zero sentences aggregates to an all-zero vector and zero
/// counts; only `sentence_count` distinguishes it from a document whose
/// sentences all scored zero.
pub fn aggregate_document(sentence_vectors: &[RiskVector]) -> DocumentAnalysis {
    let sentence_count = sentence_vectors.len();
    if sentence_count == 0 {
        return DocumentAnalysis {
            vector: RiskVector::zero(),
            diagnostics: DocumentDiagnostics {
                sentence_count: 0,
                flagged_sentences: 0,
                flagged_proportion: 0.0,
            },
        };
    }

    let mut totals = [0.0; RiskDimension::COUNT];
    let mut flagged_sentences = 0;
    for vector in sentence_vectors {
        if vector.is_flagged() {
            flagged_sentences += 1;
        }
        for (total, value) in totals.iter_mut().zip(vector.to_array()) {
            *total += value;
        }
    }

    for total in &mut totals {
        *total /= sentence_count as f64;
    }

    DocumentAnalysis {
        vector: RiskVector::from_array(totals),
        diagnostics: DocumentDiagnostics {
            sentence_count,
            flagged_sentences,
            flagged_proportion: flagged_sentences as f64 / sentence_count as f64,
        },
    }
}
