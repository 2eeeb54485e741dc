//! Command-line interface for the extractor.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::dispatch::DocumentStats;
use crate::error::{ExtractError, Result};
use crate::sink::{JsonLinesSink, RecordSink};
use crate::source::{collect_corpus, process_file};

/// Zakupki Extractor - Extract procurement records from zakupki.gov.ru exports.
#[derive(Parser)]
#[command(name = "zakupki-extractor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract records from a corpus directory into JSON lines.
    Extract {
        /// Directory holding the downloaded export files
        path: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { path, output } => extract_command(&path, output.as_deref()),
    }
}

/// Execute the extract command.
fn extract_command(path: &Path, output: Option<&Path>) -> Result<()> {
    if !path.is_dir() {
        return Err(ExtractError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Corpus path is not a directory: {}", path.display()),
        )));
    }

    println!(
        "{} {}",
        style("Extracting").bold(),
        style(path.display()).cyan()
    );
    println!();

    let files = collect_corpus(path)?;
    if files.is_empty() {
        println!("{}", style("No corpus files found.").yellow());
        return Ok(());
    }

    let stats = match output {
        Some(target) => {
            let mut sink = JsonLinesSink::new(BufWriter::new(File::create(target)?));
            let stats = extract_files(&files, &mut sink)?;
            sink.into_inner()?;
            stats
        }
        None => {
            let mut sink = JsonLinesSink::new(io::stdout().lock());
            let stats = extract_files(&files, &mut sink)?;
            sink.into_inner()?;
            stats
        }
    };

    println!();
    print_summary(&stats);

    if let Some(target) = output {
        println!();
        println!(
            "{} {}",
            style("Saved to:").green().bold(),
            target.display()
        );
    }

    Ok(())
}

/// Process every corpus file behind a progress bar.
fn extract_files(files: &[PathBuf], sink: &mut dyn RecordSink) -> Result<DocumentStats> {
    let pb = ProgressBar::new(files.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let mut stats = DocumentStats::default();
    for path in files {
        pb.set_message(
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        match process_file(path, sink) {
            Ok(file_stats) => stats.absorb(file_stats),
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(stats)
}

fn print_summary(stats: &DocumentStats) {
    println!("  Lots: {}", style(stats.lots).green());
    println!("  Customers: {}", style(stats.customers).green());
    println!("  Contracts: {}", style(stats.contracts).green());
    println!("  Participants: {}", style(stats.participants).green());
    if stats.dropped_contracts > 0 {
        println!(
            "  Dropped contracts: {}",
            style(stats.dropped_contracts).yellow()
        );
    }
    if stats.skipped_participants > 0 {
        println!(
            "  Skipped participants: {}",
            style(stats.skipped_participants).yellow()
        );
    }
    if stats.failed_elements > 0 {
        println!(
            "  Failed elements: {}",
            style(stats.failed_elements).yellow().bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_extract() {
        let cli = Cli::parse_from(["zakupki-extractor", "extract", "corpus/"]);

        let Commands::Extract { path, output } = cli.command;
        assert_eq!(path, PathBuf::from("corpus/"));
        assert!(output.is_none());
    }

    #[test]
    fn test_cli_parse_extract_with_output() {
        let cli = Cli::parse_from([
            "zakupki-extractor",
            "extract",
            "corpus/",
            "--output",
            "records.jsonl",
        ]);

        let Commands::Extract { path, output } = cli.command;
        assert_eq!(path, PathBuf::from("corpus/"));
        assert_eq!(output, Some(PathBuf::from("records.jsonl")));
    }
}
