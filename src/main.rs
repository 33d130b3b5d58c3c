use std::path::PathBuf;

use clap::Parser;
use roster_tools::{Config, Result, ToolError, pipeline};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing()?;

    let mut config = Config::load(&cli.config)?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    info!(
        end_date = %config.end_date,
        term = %config.term,
        data_dir = %config.data_dir.display(),
        output_dir = %config.output_dir.display(),
        "configuration loaded"
    );

    pipeline::process_rosters(&config)?;
    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Merge program rosters and write the participation and masterlist reports."
)]
struct Cli {
    /// Configuration file holding `end_date` and `term`.
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Override the roster directory from the configuration.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Override the output directory from the configuration.
    #[arg(long)]
    output_dir: Option<PathBuf>,
}
