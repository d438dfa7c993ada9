use anyhow::Result;
use clap::Parser;
use rhetmap::cli::{Cli, Commands};
use rhetmap::commands::analyze::{handle_analyze, AnalyzeConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            paths,
            format,
            output,
            config,
            log_file,
            no_log,
            no_parallel,
        } => handle_analyze(AnalyzeConfig {
            paths,
            format,
            output,
            config,
            log_file,
            no_log,
            parallel: !no_parallel,
        }),
    }
}
