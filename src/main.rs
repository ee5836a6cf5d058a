use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rollcall::{JoinConfig, Joiner, Report, SequenceIterator, DEFAULT_DELIMITER};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rollcall", about = "Iterate a sequence and print it as one delimited line")]
struct Cli {
    /// Text placed between elements.
    #[arg(long, global = true, default_value = DEFAULT_DELIMITER)]
    delimiter: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Flatten a department report (`department: name, name, ...` per line).
    Report {
        /// Report file.
        path: PathBuf,
    },
    /// Join the non-blank lines of a file.
    List {
        /// Input file (one element per line).
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let joiner = Joiner::new(JoinConfig::new().with_delimiter(cli.delimiter));

    let summary = match cli.command {
        Commands::Report { path } => run_report(&joiner, path)?,
        Commands::List { path } => run_list(&joiner, path)?,
    };

    println!("{summary}");
    Ok(())
}

fn run_report(joiner: &Joiner, path: PathBuf) -> Result<String> {
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read report from {}", path.display()))?;
    let report = Report::parse(&text)
        .with_context(|| format!("invalid report in {}", path.display()))?;

    info!(
        departments = report.departments().len(),
        employees = report.employee_count(),
        "loaded report"
    );

    let mut employees = report.employees_iter();
    let summary = joiner.join(&mut employees);
    debug!(pulled = employees.position(), "report drained");
    Ok(summary)
}

fn run_list(joiner: &Joiner, path: PathBuf) -> Result<String> {
    let reader = BufReader::new(
        File::open(&path).with_context(|| format!("failed to open list file {}", path.display()))?,
    );

    let mut items = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
        let item = line.trim();
        if item.is_empty() {
            continue;
        }
        items.push(item.to_string());
    }

    info!(items = items.len(), "loaded list");
    Ok(joiner.join(SequenceIterator::from(items)))
}
