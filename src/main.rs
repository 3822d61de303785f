use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use eytzinger_search::{is_eytzinger, Eytzinger};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "eytzinger", about = "Build and query cache-friendly Eytzinger layouts")]
struct Cli {
    /// How input lines and targets are parsed.
    #[arg(long, value_enum, default_value_t = Kind::Int, global = true)]
    kind: Kind,
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    /// Signed 64-bit integers.
    Int,
    /// Raw text, compared bytewise.
    Text,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the Eytzinger order of a sorted file, one value per line.
    Layout {
        /// Sorted input (one value per line).
        input: PathBuf,
        /// Reject unsorted input instead of laying it out anyway.
        #[arg(long)]
        check: bool,
    },
    /// Look up targets in the layout of a sorted file.
    Search {
        /// Sorted input (one value per line).
        input: PathBuf,
        /// Values to look up.
        #[arg(required = true)]
        targets: Vec<String>,
    },
    /// Check whether a file is already in Eytzinger order.
    Check {
        /// Candidate layout (one value per line).
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.kind {
        Kind::Int => run::<i64>(cli.command),
        Kind::Text => run::<String>(cli.command),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run<T>(command: Commands) -> Result<()>
where
    T: FromStr + Ord + Clone + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match command {
        Commands::Layout { input, check } => run_layout::<T>(&input, check),
        Commands::Search { input, targets } => run_search::<T>(&input, &targets),
        Commands::Check { input } => run_check::<T>(&input),
    }
}

fn run_layout<T>(input: &Path, check: bool) -> Result<()>
where
    T: FromStr + Ord + Clone + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let values = read_values::<T>(input)?;
    let tree = if check {
        Eytzinger::try_from_sorted(&values)
            .with_context(|| format!("{} cannot be laid out", input.display()))?
    } else {
        Eytzinger::from_sorted(&values)
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for value in tree.as_slice() {
        writeln!(out, "{value}")?;
    }
    out.flush()?;
    Ok(())
}

fn run_search<T>(input: &Path, targets: &[String]) -> Result<()>
where
    T: FromStr + Ord + Clone + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let values = read_values::<T>(input)?;
    let tree = Eytzinger::from_sorted(&values);
    tracing::info!(len = tree.len(), targets = targets.len(), "layout ready");

    for raw in targets {
        let target: T = raw
            .parse()
            .with_context(|| format!("invalid target '{raw}'"))?;
        let (position, found) = tree.search(&target);
        println!("{target}\t{position}\t{found}");
    }
    Ok(())
}

fn run_check<T>(input: &Path) -> Result<()>
where
    T: FromStr + Ord,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let values = read_values::<T>(input)?;
    if !is_eytzinger(&values) {
        anyhow::bail!("{} is not in eytzinger order", input.display());
    }
    println!("{}: valid eytzinger layout of {} values", input.display(), values.len());
    Ok(())
}

/// One value per line; surrounding whitespace is ignored and blank lines
/// are skipped.
fn read_values<T>(path: &Path) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut values = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse().with_context(|| {
            format!("invalid value '{}' on line {}", trimmed, line_no + 1)
        })?;
        values.push(value);
    }

    tracing::debug!(path = %path.display(), len = values.len(), "read input");
    Ok(values)
}
