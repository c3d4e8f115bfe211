mod index;
mod input;
mod logging;
mod model;
mod query;
mod repl;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::index::dataset::{Dataset, InstallError};
use crate::model::record::Label;
use crate::model::thresholds::{
    DEFAULT_NEIGHBOR_WINDOW, DEFAULT_SCAN_DEPTH, QUICK_PICK_COUNT, STRING_V11_PROTEINS, TotalCount,
};
use crate::query::Resolver;
use crate::query::quick_picks::QuickPicks;
use crate::query::scan::{default_scan_labels, scan_labeled};
use crate::repl::run_repl;
use crate::report::{OutputFormat, ReportError, write_quick_picks, write_scan, write_view};

#[derive(Debug, Parser)]
#[command(
    name = "iei-gene-hunter",
    version,
    about = "Look up precomputed IEI candidate ranks for protein-coding genes"
)]
struct Cli {
    /// Gene data JSON (optionally .gz).
    #[arg(long, env = "IEI_DATA", default_value = "data.json", global = true)]
    data: PathBuf,

    /// Percentile denominator: fixed protein universe or number of ranked genes loaded.
    #[arg(long, value_enum, default_value_t = TotalMode::Fixed, global = true)]
    total: TotalMode,

    #[arg(
        long,
        default_value_t = STRING_V11_PROTEINS,
        value_parser = clap::value_parser!(u32).range(1..),
        global = true
    )]
    fixed_total: u32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TotalMode {
    Fixed,
    Live,
}

#[derive(Debug, Clone, Copy, clap::Args)]
struct NeighborArgs {
    /// Ranks shown on each side of the queried gene.
    #[arg(long, default_value_t = DEFAULT_NEIGHBOR_WINDOW)]
    neighbors: u32,

    #[arg(long)]
    no_neighbors: bool,
}

impl NeighborArgs {
    fn resolver(self) -> Resolver {
        if self.no_neighbors {
            Resolver::new()
        } else {
            Resolver::with_neighbors(self.neighbors)
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify one or more gene symbols.
    Lookup {
        #[arg(required = true)]
        symbols: Vec<String>,
        #[command(flatten)]
        neighbors: NeighborArgs,
    },
    /// List the best-ranked genes.
    Top {
        #[arg(short = 'n', long, default_value_t = QUICK_PICK_COUNT)]
        count: usize,
    },
    /// List labelled genes among the best ranks.
    Scan {
        #[arg(long, default_value_t = DEFAULT_SCAN_DEPTH)]
        within: u32,
        /// Label tag to match; repeatable. Defaults to known and novel IEI.
        #[arg(long = "label")]
        labels: Vec<String>,
    },
    /// Answer queries read from stdin.
    Repl {
        #[command(flatten)]
        neighbors: NeighborArgs,
    },
}

impl Cli {
    fn total_count(&self) -> TotalCount {
        match self.total {
            TotalMode::Fixed => TotalCount::Fixed(self.fixed_total),
            TotalMode::Live => TotalCount::Live,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Install(#[from] InstallError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "aborting");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let dataset = Dataset::new();
    dataset.load(&cli.data, cli.total_count())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Lookup { symbols, neighbors } => {
            let resolver = neighbors.resolver();
            for symbol in symbols {
                if let Some(view) = resolver.classify(symbol, &dataset) {
                    write_view(&mut out, &view, cli.format)?;
                }
            }
        }
        Command::Top { count } => {
            let picks = QuickPicks::from_dataset(&dataset, *count);
            write_quick_picks(&mut out, picks.as_ref(), cli.format)?;
        }
        Command::Scan { within, labels } => {
            let labels = scan_labels(labels);
            let hits = dataset.index().map(|index| scan_labeled(index, *within, &labels));
            write_scan(&mut out, hits.as_deref(), *within, cli.format)?;
        }
        Command::Repl { neighbors } => {
            let stdin = std::io::stdin();
            run_repl(
                &dataset,
                neighbors.resolver(),
                cli.format,
                stdin.lock(),
                &mut out,
            )?;
        }
    }

    if dataset.load_error().is_some() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn scan_labels(tags: &[String]) -> Vec<Label> {
    if tags.is_empty() {
        return default_scan_labels();
    }
    tags.iter().map(|tag| Label::from_tag(tag)).collect()
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
