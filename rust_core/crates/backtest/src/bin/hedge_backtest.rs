use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use hedge_backtest::{run_pipeline_from_json, BacktestError};
use hedge_types::PipelineReport;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

#[derive(Parser, Debug)]
#[command(name = "hedge-backtest")]
#[command(about = "Run a hedge overlay backtest and print the JSON report")]
#[command(version)]
struct Cli {
    /// Path to the pipeline configuration (JSON)
    config: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout carries the report
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
}

fn run(path: &Path) -> Result<String, BacktestError> {
    let config_json = std::fs::read_to_string(path)?;
    run_pipeline_from_json(&config_json)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("failed to init logging: {e}");
    }

    match run(&cli.config) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(category = err.error_category(), "{err}");
            let report = PipelineReport::failure(err.into());
            match serde_json::to_string(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("failed to serialize error report: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}
