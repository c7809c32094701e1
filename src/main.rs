use anyhow::{Context, Result};
use counted::cli::{self, Commands, RunArgs};
use counted::commands::{self, RunConfig};
use counted::config::{self, CountedConfig};
use counted::io::{FileDestination, OutputDestination, StdoutDestination};
use counted::observability::init_logging;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    init_logging(cli.verbosity);

    match cli.into_command() {
        Commands::Run(args) => handle_run_command(args),
        Commands::Init { force } => {
            let path = commands::init::init_config(force)?;
            println!("Created {} configuration file", path.display());
            Ok(())
        }
    }
}

fn handle_run_command(args: RunArgs) -> Result<()> {
    let file_config = load_file_config(&args)?;
    let parallel = args.parallel_override();
    let run_config = RunConfig::resolve(&file_config, args.lengths, args.report, parallel);

    let destination = create_destination(args.output);
    commands::run_global(&run_config, destination.as_ref())
        .with_context(|| format!("run failed (output: {})", destination.description()))?;
    Ok(())
}

// Explicit --config must load; otherwise search quietly and fall back to defaults
fn load_file_config(args: &RunArgs) -> Result<CountedConfig> {
    match &args.config {
        Some(path) => Ok(config::load_config_from(path)?),
        None => Ok(config::load_config()),
    }
}

fn create_destination(output: Option<std::path::PathBuf>) -> Box<dyn OutputDestination> {
    match output {
        Some(path) => Box::new(FileDestination::new(path)),
        None => Box::new(StdoutDestination::new()),
    }
}
