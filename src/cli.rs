//! Command-line argument parsing and dispatch for the `netgen` binary.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::error::{GridError, NetgenError};
use crate::params::{GridParams, NetgenParams, ProblemType};
use crate::random::RngKind;
use crate::{grid, netgen, writer};

/// A random flow-network problem generator, reproducing the classic NETGEN
/// generator byte-for-byte plus a simpler grid-based variant.
#[derive(Debug, Parser)]
#[command(name = "netgen", version, about, disable_version_flag = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Write output to this file instead of stdout.
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<PathBuf>,

    /// Suppress the success message printed after a file write.
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Print version information and exit.
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    pub version: (),
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a NETGEN min-cost-flow / max-flow / assignment instance.
    Netgen(NetgenArgs),
    /// Generate a deterministic grid-layout instance.
    Grid(GridArgs),
}

/// Selects which pseudo-random source a run uses.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum RngArg {
    /// The bit-exact NETGEN Lehmer generator (default).
    #[default]
    Netgen,
    /// A `rand`-backed generator, not cross-language reproducible.
    Standard,
}

impl From<RngArg> for RngKind {
    fn from(value: RngArg) -> Self {
        match value {
            RngArg::Netgen => RngKind::Netgen,
            RngArg::Standard => RngKind::Standard,
        }
    }
}

impl std::fmt::Display for RngArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RngArg::Netgen => write!(f, "netgen"),
            RngArg::Standard => write!(f, "standard"),
        }
    }
}

/// Positional arguments for the `netgen` subcommand, in the historic NETGEN
/// `parms[]` order.
#[derive(Debug, Args)]
pub struct NetgenArgs {
    #[arg(default_value_t = 1)]
    pub seed: i64,
    #[arg(default_value_t = 10)]
    pub nodes: i64,
    #[arg(default_value_t = 3)]
    pub sources: i64,
    #[arg(default_value_t = 3)]
    pub sinks: i64,
    #[arg(default_value_t = 30)]
    pub density: i64,
    #[arg(default_value_t = 10)]
    pub mincost: i64,
    #[arg(default_value_t = 99)]
    pub maxcost: i64,
    #[arg(default_value_t = 1000)]
    pub supply: i64,
    #[arg(default_value_t = 0)]
    pub tsources: i64,
    #[arg(default_value_t = 0)]
    pub tsinks: i64,
    #[arg(default_value_t = 0)]
    pub hicost: i64,
    #[arg(default_value_t = 100)]
    pub capacitated: i64,
    #[arg(default_value_t = 100)]
    pub mincap: i64,
    #[arg(default_value_t = 1000)]
    pub maxcap: i64,
    #[arg(value_enum, default_value_t = RngArg::Netgen)]
    pub rng: RngArg,
}

/// Positional arguments for the `grid` subcommand.
#[derive(Debug, Args)]
pub struct GridArgs {
    #[arg(default_value_t = 1)]
    pub seed: i64,
    #[arg(default_value_t = 3)]
    pub rows: i64,
    #[arg(default_value_t = 4)]
    pub cols: i64,
    #[arg(default_value_t = 1)]
    pub skeleton: i64,
    /// Nonzero to include diagonal arcs.
    #[arg(default_value_t = 1)]
    pub diagonal: i64,
    /// Nonzero to also generate arcs in the reverse direction.
    #[arg(default_value_t = 0)]
    pub reverse: i64,
    /// Nonzero to wrap the first and last rows together like a cylinder.
    #[arg(default_value_t = 0)]
    pub wrap: i64,
    #[arg(default_value_t = 10)]
    pub mincost: i64,
    #[arg(default_value_t = 99)]
    pub maxcost: i64,
    #[arg(default_value_t = 1000)]
    pub supply: i64,
    #[arg(default_value_t = 0)]
    pub hicost: i64,
    #[arg(default_value_t = 100)]
    pub capacitated: i64,
    #[arg(default_value_t = 100)]
    pub mincap: i64,
    #[arg(default_value_t = 1000)]
    pub maxcap: i64,
    #[arg(value_enum, default_value_t = RngArg::Netgen)]
    pub rng: RngArg,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Netgen(#[from] NetgenError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("failed to write output to `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Execute the parsed CLI and write its output to the configured sink.
///
/// # Errors
/// Returns [`CliError`] if parameter validation, generation, or the output
/// write fails.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let text = match &cli.command {
        Command::Netgen(args) => run_netgen(args)?,
        Command::Grid(args) => run_grid(args)?,
    };
    write_output(&text, cli.file.as_deref(), cli.quiet)
}

fn run_netgen(args: &NetgenArgs) -> Result<String, CliError> {
    let params = NetgenParams::new(
        args.seed,
        args.nodes,
        args.sources,
        args.sinks,
        args.density,
        args.mincost,
        args.maxcost,
        args.supply,
        args.tsources,
        args.tsinks,
        args.hicost,
        args.capacitated,
        args.mincap,
        args.maxcap,
        args.rng.into(),
        None,
    )?;
    let result = netgen::generate(&params)?;
    Ok(writer::netgen_to_string(&params, &result))
}

fn run_grid(args: &GridArgs) -> Result<String, CliError> {
    let params = GridParams::new(
        args.seed,
        args.rows,
        args.cols,
        args.skeleton,
        args.diagonal != 0,
        args.reverse != 0,
        args.wrap != 0,
        args.mincost,
        args.maxcost,
        args.supply,
        args.hicost,
        args.capacitated,
        args.mincap,
        args.maxcap,
        args.rng.into(),
        ProblemType::MinCostFlow,
    )?;
    let result = grid::generate(&params)?;
    Ok(writer::grid_to_string(&params, &result))
}

/// Write `text` to the configured sink.
///
/// Printing to stdout keeps the writer's trailing newline; writing to a
/// file strips exactly one trailing `\n` byte, matching the historic NETGEN
/// behavior of leaving files without a final blank line.
fn write_output(text: &str, file: Option<&std::path::Path>, quiet: bool) -> Result<(), CliError> {
    match file {
        Some(path) => {
            let trimmed = text.strip_suffix('\n').unwrap_or(text);
            let mut f = File::create(path).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            f.write_all(trimmed.as_bytes())
                .map_err(|source| CliError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            if !quiet {
                println!("Network generated and written to {}", path.display());
            }
            Ok(())
        }
        None => {
            print!("{text}");
            Ok(())
        }
    }
}
