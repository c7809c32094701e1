use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "counted")]
#[command(about = "Construct counted values and report a square and the instance count", long_about = None)]
#[command(version)]
#[command(subcommand_precedence_over_arg = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the default `run` command
    #[command(flatten)]
    pub run: RunArgs,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Construct values and print the reported square and the count (default)
    Run(RunArgs),

    /// Write a default .counted.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Lengths to construct, in order (defaults to 10 20)
    #[arg(allow_negative_numbers = true)]
    pub lengths: Vec<i32>,

    /// Index of the value whose square is printed
    #[arg(short, long)]
    pub report: Option<usize>,

    /// Construct values on the thread pool
    #[arg(long, conflicts_with = "no_parallel")]
    pub parallel: bool,

    /// Construct values sequentially
    #[arg(long = "no-parallel")]
    pub no_parallel: bool,

    /// Configuration file (defaults to searching for .counted.toml)
    #[arg(short, long, env = "COUNTED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RunArgs {
    /// Explicit parallelism choice, if either flag was given.
    pub fn parallel_override(&self) -> Option<bool> {
        match (self.parallel, self.no_parallel) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

impl Cli {
    /// The command to execute, with bare invocation meaning `run`.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Run(self.run))
    }
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
