//! Common type definitions used across the codebase

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The four rhetorical risk dimensions scored by the pipeline.
///
/// The set is closed: scoring, aggregation, and normalization all iterate
/// over [`RiskDimension::ALL`] and rely on its fixed column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskDimension {
    EmbeddedDefault,
    BurdenShift,
    Deflection,
    InterestConcealment,
}

impl RiskDimension {
    pub const COUNT: usize = 4;

    /// Canonical column order for matrices and reports.
    pub const ALL: [RiskDimension; Self::COUNT] = [
        RiskDimension::EmbeddedDefault,
        RiskDimension::BurdenShift,
        RiskDimension::Deflection,
        RiskDimension::InterestConcealment,
    ];

    /// Snake_case name used in reports and the risk log.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskDimension::EmbeddedDefault => "embedded_default",
            RiskDimension::BurdenShift => "burden_shift",
            RiskDimension::Deflection => "deflection",
            RiskDimension::InterestConcealment => "interest_concealment",
        }
    }

    /// Column index in [`RiskDimension::ALL`].
    pub fn index(&self) -> usize {
        match self {
            RiskDimension::EmbeddedDefault => 0,
            RiskDimension::BurdenShift => 1,
            RiskDimension::Deflection => 2,
            RiskDimension::InterestConcealment => 3,
        }
    }
}

impl std::fmt::Display for RiskDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One score per risk dimension.
///
/// The same type carries sentence-level scores (each in `[0.0, 3.0]` after
/// clamping), document-level means, and standardized z-scores; only the
/// producing stage changes the interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskVector {
    pub embedded_default: f64,
    pub burden_shift: f64,
    pub deflection: f64,
    pub interest_concealment: f64,
}

impl RiskVector {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, dimension: RiskDimension) -> f64 {
        match dimension {
            RiskDimension::EmbeddedDefault => self.embedded_default,
            RiskDimension::BurdenShift => self.burden_shift,
            RiskDimension::Deflection => self.deflection,
            RiskDimension::InterestConcealment => self.interest_concealment,
        }
    }

    pub fn set(&mut self, dimension: RiskDimension, value: f64) {
        match dimension {
            RiskDimension::EmbeddedDefault => self.embedded_default = value,
            RiskDimension::BurdenShift => self.burden_shift = value,
            RiskDimension::Deflection => self.deflection = value,
            RiskDimension::InterestConcealment => self.interest_concealment = value,
        }
    }

    pub fn add(&mut self, dimension: RiskDimension, weight: f64) {
        let current = self.get(dimension);
        self.set(dimension, current + weight);
    }

    pub fn to_array(self) -> [f64; RiskDimension::COUNT] {
        [
            self.embedded_default,
            self.burden_shift,
            self.deflection,
            self.interest_concealment,
        ]
    }

    pub fn from_array(values: [f64; RiskDimension::COUNT]) -> Self {
        Self {
            embedded_default: values[0],
            burden_shift: values[1],
            deflection: values[2],
            interest_concealment: values[3],
        }
    }

    /// True when at least one dimension is non-zero.
    pub fn is_flagged(&self) -> bool {
        self.to_array().iter().any(|&v| v != 0.0)
    }
}

/// Coverage diagnostics for one analyzed document.
///
/// `sentence_count == 0` is the only way to tell an empty or unreadable
/// document apart from a benign one whose sentences all scored zero; the
/// final vector is all-zeros in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentDiagnostics {
    pub sentence_count: usize,
    pub flagged_sentences: usize,
    pub flagged_proportion: f64,
}

/// Aggregated result for one document: the mean risk vector plus coverage
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub vector: RiskVector,
    pub diagnostics: DocumentDiagnostics,
}

/// One standardized row of a corpus matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub document: String,
    pub zscores: RiskVector,
}

/// Batch-relative z-scored matrix over a corpus of documents.
///
/// Values are standardized with the batch's own per-column mean and
/// population standard deviation, so z-scores from different batches are
/// not comparable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusMatrix {
    pub rows: Vec<MatrixRow>,
    /// Per-column means of the raw batch, kept for report footers.
    pub column_means: RiskVector,
    /// Per-column population standard deviations of the raw batch.
    pub column_stddevs: RiskVector,
}

/// Per-document entry of a full corpus report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub document: String,
    #[serde(flatten)]
    pub analysis: DocumentAnalysis,
}

/// Everything one `analyze` run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusReport {
    pub generated_at: DateTime<Local>,
    pub documents: Vec<DocumentReport>,
    /// Present when two or more documents were analyzed together.
    pub matrix: Option<CorpusMatrix>,
}
