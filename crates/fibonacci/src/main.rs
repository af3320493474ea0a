//! Fibonacci benchmark CLI
//!
//! Reads n from the input file, computes F(n) recursively and writes the
//! result to the output file.

use bj::Settings;
use clap::Parser as ClapParser;
use fibonacci::FibonacciSetup;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "fibonacci")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Naive recursive Fibonacci benchmark kernel", long_about = None)]
struct Cli {
    /// JSON file holding n
    input: PathBuf,

    /// JSON file to write F(n) to
    output: PathBuf,

    /// Run settings (TOML with `warmup` and `repetitions`)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Untimed runs before measuring (overrides the settings file)
    #[arg(long)]
    warmup: Option<u32>,

    /// Timed runs (overrides the settings file)
    #[arg(short, long)]
    repetitions: Option<u32>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fibonacci=warn,bj=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), bj::HarnessError> {
    let mut settings = match &cli.settings {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    if let Some(warmup) = cli.warmup {
        settings = settings.with_warmup(warmup);
    }
    if let Some(repetitions) = cli.repetitions {
        settings = settings.with_repetitions(repetitions);
    }

    debug!(
        "settings: warmup={}, repetitions={}",
        settings.warmup, settings.repetitions
    );

    bj::perform(&FibonacciSetup, &cli.input, &cli.output, &settings)?;
    Ok(())
}
