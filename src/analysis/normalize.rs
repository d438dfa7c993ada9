//! Cross-document standardization.
//!
//! Z-scores are computed per column over the submitted batch only, with the
//! batch's own mean and population standard deviation. Scores from different
//! batches are therefore not comparable; that is a property of the design,
//! not something to correct here.

use crate::core::{CorpusMatrix, MatrixRow, RiskDimension, RiskVector};
use crate::errors::RhetmapError;

/// Standardize a batch of document vectors into a z-scored matrix.
///
/// Row order follows submission order. A column with zero variance
/// standardizes to 0.0 for every row, which also makes a single-document
/// batch an all-zero row. An empty batch is a caller error.
pub fn standardize_corpus(
    batch: &[(String, RiskVector)],
) -> Result<CorpusMatrix, RhetmapError> {
    if batch.is_empty() {
        return Err(RhetmapError::EmptyCorpus);
    }
    let n = batch.len() as f64;

    let mut means = [0.0; RiskDimension::COUNT];
    let mut stddevs = [0.0; RiskDimension::COUNT];
    for dimension in RiskDimension::ALL {
        let column = dimension.index();
        let sum: f64 = batch.iter().map(|(_, v)| v.get(dimension)).sum();
        let mean = sum / n;
        let variance = batch
            .iter()
            .map(|(_, v)| {
                let delta = v.get(dimension) - mean;
                delta * delta
            })
            .sum::<f64>()
            / n;
        means[column] = mean;
        stddevs[column] = variance.sqrt();
    }

    let rows = batch
        .iter()
        .map(|(document, vector)| {
            let mut zscores = RiskVector::zero();
            for dimension in RiskDimension::ALL {
                let column = dimension.index();
                let z = if stddevs[column] == 0.0 {
                    0.0
                } else {
                    (vector.get(dimension) - means[column]) / stddevs[column]
                };
                zscores.set(dimension, z);
            }
            MatrixRow {
                document: document.clone(),
                zscores,
            }
        })
        .collect();

    Ok(CorpusMatrix {
        rows,
        column_means: RiskVector::from_array(means),
        column_stddevs: RiskVector::from_array(stddevs),
    })
}
