//! The `analyze` command: extract, score, aggregate, normalize, report.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::Local;
use rayon::prelude::*;

use crate::analysis::{analyze_text, standardize_corpus};
use crate::cli::OutputFormat;
use crate::config::RhetmapConfig;
use crate::core::{CorpusReport, DocumentReport, RiskVector};
use crate::extract::{PlainTextExtractor, TextExtractor};
use crate::io::output::{self, create_writer};
use crate::io::risk_log::RiskLog;
use crate::io::walker::DocumentWalker;
use crate::lexicon::LexiconRegistry;

pub struct AnalyzeConfig {
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub no_log: bool,
    pub parallel: bool,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let file_config = RhetmapConfig::load(config.config.as_deref())?;
    let registry = LexiconRegistry::with_extensions(&file_config.marker_extensions());

    let walker = DocumentWalker::with_extensions(file_config.extensions.clone());
    let documents = walker.collect(&config.paths);
    if documents.is_empty() {
        bail!("no documents to analyze under the given paths");
    }

    let reports = if config.parallel {
        documents
            .par_iter()
            .map(|path| analyze_document(path, &registry))
            .collect()
    } else {
        documents
            .iter()
            .map(|path| analyze_document(path, &registry))
            .collect::<Vec<_>>()
    };

    if !config.no_log {
        let log_path = config
            .log_file
            .clone()
            .unwrap_or_else(|| file_config.log_file.clone());
        let risk_log = RiskLog::new(log_path);
        for report in &reports {
            risk_log.append(&report.document, &report.analysis.vector)?;
        }
    }

    // Normalization needs the whole batch; a single document has no batch
    // statistics worth reporting.
    let matrix = if reports.len() >= 2 {
        let batch: Vec<(String, RiskVector)> = reports
            .iter()
            .map(|r| (r.document.clone(), r.analysis.vector))
            .collect();
        Some(standardize_corpus(&batch)?)
    } else {
        None
    };

    let report = CorpusReport {
        generated_at: Local::now(),
        documents: reports,
        matrix,
    };

    let destination: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut writer = create_writer(output_format(config.format), destination);
    writer.write_report(&report)?;
    Ok(())
}

/// Analyze one document. Extraction failure degrades to empty text so the
/// rest of the batch proceeds; the zero sentence count records what
/// happened.
fn analyze_document(path: &PathBuf, registry: &LexiconRegistry) -> DocumentReport {
    let text = match PlainTextExtractor.extract(path) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("{err}; treating document as empty");
            String::new()
        }
    };
    let analysis = analyze_text(&text, registry);
    log::info!(
        "{}: {} sentences analyzed, {} with non-zero features (proportion {:.3})",
        path.display(),
        analysis.diagnostics.sentence_count,
        analysis.diagnostics.flagged_sentences,
        analysis.diagnostics.flagged_proportion
    );
    DocumentReport {
        document: path.display().to_string(),
        analysis,
    }
}

fn output_format(format: OutputFormat) -> output::OutputFormat {
    match format {
        OutputFormat::Json => output::OutputFormat::Json,
        OutputFormat::Markdown => output::OutputFormat::Markdown,
        OutputFormat::Terminal => output::OutputFormat::Terminal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn analyze_config(paths: Vec<PathBuf>, output: PathBuf) -> AnalyzeConfig {
        AnalyzeConfig {
            paths,
            format: OutputFormat::Json,
            output: Some(output),
            config: None,
            log_file: None,
            no_log: true,
            parallel: false,
        }
    }

    #[test]
    fn corpus_run_writes_matrix_and_survives_a_missing_document() {
        let dir = tempfile::TempDir::new().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        fs::write(&first, "We consider this matter closed. Our position remains unchanged.")
            .unwrap();
        fs::write(&second, "Thank you for your letter.").unwrap();
        let missing = dir.path().join("missing.txt");

        let output = dir.path().join("report.json");
        handle_analyze(analyze_config(
            vec![first, second, missing],
            output.clone(),
        ))
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let documents = value["documents"].as_array().unwrap();
        assert_eq!(documents.len(), 3);
        // The unreadable document aggregates to zero sentences, not a
        // failure.
        assert_eq!(documents[2]["diagnostics"]["sentence_count"], 0);
        assert_eq!(value["matrix"]["rows"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn single_document_run_has_no_matrix() {
        let dir = tempfile::TempDir::new().unwrap();
        let letter = dir.path().join("letter.txt");
        fs::write(&letter, "You must reply. This is final.").unwrap();

        let output = dir.path().join("report.json");
        handle_analyze(analyze_config(vec![letter], output.clone())).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert!(value["matrix"].is_null());
        assert!(value["documents"][0]["vector"]["burden_shift"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn risk_log_receives_one_line_per_document() {
        let dir = tempfile::TempDir::new().unwrap();
        let first = dir.path().join("a.txt");
        let second = dir.path().join("b.txt");
        fs::write(&first, "First.").unwrap();
        fs::write(&second, "Second.").unwrap();

        let log_path = dir.path().join("vectors.log");
        let mut config = analyze_config(
            vec![first, second],
            dir.path().join("report.json"),
        );
        config.no_log = false;
        config.log_file = Some(log_path.clone());
        handle_analyze(config).unwrap();

        let log = fs::read_to_string(&log_path).unwrap();
        assert_eq!(log.lines().count(), 2);
        assert!(log.contains("embedded_default="));
    }
}
