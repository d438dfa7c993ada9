//! Append-only sink for computed document vectors.
//!
//! One line per analyzed document:
//!
//! ```text
//! 2026-08-07T14:02:11 | letters/reply.txt | embedded_default=0.250000, burden_shift=1.000000, deflection=0.000000, interest_concealment=0.500000
//! ```

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::core::{RiskDimension, RiskVector};
use crate::errors::RhetmapError;

pub struct RiskLog {
    path: PathBuf,
}

impl RiskLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one document's vector, creating the log file if needed.
    pub fn append(&self, document: &str, vector: &RiskVector) -> Result<(), RhetmapError> {
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        let line = format_line(&timestamp, document, vector);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

fn format_line(timestamp: &str, document: &str, vector: &RiskVector) -> String {
    let scores = RiskDimension::ALL
        .iter()
        .map(|dimension| format!("{}={:.6}", dimension.as_str(), vector.get(*dimension)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{timestamp} | {document} | {scores}\n")
}
