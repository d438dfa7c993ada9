//! Report writers.

use std::io::Write;

use colored::*;
use comfy_table::Table;

use crate::core::{CorpusMatrix, CorpusReport, DocumentReport, RiskDimension};

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &CorpusReport) -> anyhow::Result<()>;
}

pub fn create_writer(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &CorpusReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_documents(&mut self, documents: &[DocumentReport]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Documents")?;
        writeln!(self.writer)?;
        write!(self.writer, "| Document |")?;
        for dimension in RiskDimension::ALL {
            write!(self.writer, " {dimension} |")?;
        }
        writeln!(self.writer, " Sentences | Flagged |")?;
        write!(self.writer, "|----------|")?;
        for _ in RiskDimension::ALL {
            write!(self.writer, "---|")?;
        }
        writeln!(self.writer, "---|---|")?;
        for entry in documents {
            write!(self.writer, "| {} |", entry.document)?;
            for dimension in RiskDimension::ALL {
                write!(self.writer, " {:.3} |", entry.analysis.vector.get(dimension))?;
            }
            writeln!(
                self.writer,
                " {} | {} |",
                entry.analysis.diagnostics.sentence_count,
                entry.analysis.diagnostics.flagged_sentences
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_matrix(&mut self, matrix: &CorpusMatrix) -> anyhow::Result<()> {
        writeln!(self.writer, "## Corpus matrix (z-scores)")?;
        writeln!(self.writer)?;
        write!(self.writer, "| Document |")?;
        for dimension in RiskDimension::ALL {
            write!(self.writer, " {dimension} |")?;
        }
        writeln!(self.writer)?;
        write!(self.writer, "|----------|")?;
        for _ in RiskDimension::ALL {
            write!(self.writer, "---|")?;
        }
        writeln!(self.writer)?;
        for row in &matrix.rows {
            write!(self.writer, "| {} |", row.document)?;
            for dimension in RiskDimension::ALL {
                write!(self.writer, " {:+.3} |", row.zscores.get(dimension))?;
            }
            writeln!(self.writer)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &CorpusReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Rhetorical Risk Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(self.writer)?;
        self.write_documents(&report.documents)?;
        if let Some(matrix) = &report.matrix {
            self.write_matrix(matrix)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn format_score(value: f64) -> ColoredString {
        let text = format!("{value:.3}");
        if value >= 1.0 {
            text.red()
        } else if value >= 0.5 {
            text.yellow()
        } else if value > 0.0 {
            text.normal()
        } else {
            text.dimmed()
        }
    }

    fn write_document(&mut self, entry: &DocumentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", entry.document.bold())?;
        for dimension in RiskDimension::ALL {
            writeln!(
                self.writer,
                "  {:<22} {}",
                dimension.as_str(),
                Self::format_score(entry.analysis.vector.get(dimension))
            )?;
        }
        let diagnostics = &entry.analysis.diagnostics;
        writeln!(
            self.writer,
            "  {}",
            format!(
                "{} sentences, {} flagged (proportion {:.3})",
                diagnostics.sentence_count,
                diagnostics.flagged_sentences,
                diagnostics.flagged_proportion
            )
            .dimmed()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_matrix(&mut self, matrix: &CorpusMatrix) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Corpus matrix (z-scores)".bold())?;
        let mut table = Table::new();
        let mut header = vec!["document".to_string()];
        header.extend(RiskDimension::ALL.iter().map(|d| d.as_str().to_string()));
        table.set_header(header);
        for row in &matrix.rows {
            let mut cells = vec![row.document.clone()];
            cells.extend(
                RiskDimension::ALL
                    .iter()
                    .map(|d| format!("{:+.3}", row.zscores.get(*d))),
            );
            table.add_row(cells);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &CorpusReport) -> anyhow::Result<()> {
        for entry in &report.documents {
            self.write_document(entry)?;
        }
        if let Some(matrix) = &report.matrix {
            self.write_matrix(matrix)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        DocumentAnalysis, DocumentDiagnostics, DocumentReport, MatrixRow, RiskVector,
    };
    use chrono::Local;

    fn sample_report() -> CorpusReport {
        let analysis = DocumentAnalysis {
            vector: RiskVector {
                embedded_default: 0.5,
                burden_shift: 1.0,
                deflection: 0.0,
                interest_concealment: 0.25,
            },
            diagnostics: DocumentDiagnostics {
                sentence_count: 4,
                flagged_sentences: 2,
                flagged_proportion: 0.5,
            },
        };
        CorpusReport {
            generated_at: Local::now(),
            documents: vec![
                DocumentReport {
                    document: "a.txt".to_string(),
                    analysis,
                },
                DocumentReport {
                    document: "b.txt".to_string(),
                    analysis,
                },
            ],
            matrix: Some(CorpusMatrix {
                rows: vec![
                    MatrixRow {
                        document: "a.txt".to_string(),
                        zscores: RiskVector::zero(),
                    },
                    MatrixRow {
                        document: "b.txt".to_string(),
                        zscores: RiskVector::zero(),
                    },
                ],
                column_means: RiskVector::zero(),
                column_stddevs: RiskVector::zero(),
            }),
        }
    }

    #[test]
    fn json_writer_emits_valid_json_with_dimension_keys() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let first = &value["documents"][0];
        assert_eq!(first["document"], "a.txt");
        assert_eq!(first["vector"]["burden_shift"], 1.0);
        assert_eq!(first["diagnostics"]["sentence_count"], 4);
        assert!(value["matrix"]["rows"].is_array());
    }

    #[test]
    fn markdown_writer_renders_both_tables() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();

        let markdown = String::from_utf8(buffer).unwrap();
        assert!(markdown.contains("# Rhetorical Risk Report"));
        assert!(markdown.contains("## Documents"));
        assert!(markdown.contains("## Corpus matrix (z-scores)"));
        assert!(markdown.contains("| a.txt |"));
    }

    #[test]
    fn terminal_writer_includes_diagnostics_line() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("4 sentences, 2 flagged"));
    }
}
