use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rhetmap")]
#[command(about = "Rhetorical risk analyzer for correspondence documents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze documents and report per-document risk vectors; two or more
    /// documents also get a batch-relative z-scored matrix
    Analyze {
        /// Documents to analyze; a directory expands to the text files
        /// beneath it
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to ./rhetmap.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Risk log file (defaults to the configured path)
        #[arg(long = "log-file")]
        log_file: Option<PathBuf>,

        /// Skip the append-only risk log entirely
        #[arg(long = "no-log")]
        no_log: bool,

        /// Analyze documents sequentially instead of in parallel
        #[arg(long = "no-parallel")]
        no_parallel: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_defaults_to_terminal_format() {
        let cli = Cli::try_parse_from(["rhetmap", "analyze", "letter.txt"]).unwrap();
        let Commands::Analyze {
            paths,
            format,
            no_log,
            no_parallel,
            ..
        } = cli.command;
        assert_eq!(paths, vec![PathBuf::from("letter.txt")]);
        assert_eq!(format, OutputFormat::Terminal);
        assert!(!no_log);
        assert!(!no_parallel);
    }

    #[test]
    fn analyze_requires_at_least_one_path() {
        assert!(Cli::try_parse_from(["rhetmap", "analyze"]).is_err());
    }

    #[test]
    fn format_flag_accepts_json() {
        let cli =
            Cli::try_parse_from(["rhetmap", "analyze", "a.txt", "b.txt", "--format", "json"])
                .unwrap();
        let Commands::Analyze { format, paths, .. } = cli.command;
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(paths.len(), 2);
    }
}
