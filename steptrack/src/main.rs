//! Daily step tracker CLI.
//!
//! Reads step counts from a text file (default `steps.txt`), prints them,
//! reports statistics, runs the mutation script, shifts every value and
//! prints the top-K. Exit codes are listed in [`steptrack::exit_codes`].

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use steptrack::exit_codes;
use steptrack::io::config::{TrackerConfig, load_config};
use steptrack::io::loader::LoadError;
use steptrack::logging;
use steptrack::pipeline::run_pipeline;

#[derive(Parser, Debug)]
#[command(
    name = "steptrack",
    version,
    about = "Load daily step counts and exercise a growable array over them"
)]
struct Cli {
    /// TOML config file; missing means built-in defaults.
    #[arg(short, long, default_value = "steptrack.toml")]
    config: PathBuf,

    /// Steps file (overrides `input_file`).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Minimum number of integers required (overrides `min_days`).
    #[arg(long)]
    min_days: Option<usize>,

    /// Number of largest values to report (overrides `top_k`).
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Amount added to every value by the uniform shift (overrides `shift_delta`).
    #[arg(long, allow_negative_numbers = true)]
    shift: Option<i32>,
}

impl Cli {
    /// Load the config file, then apply command-line overrides.
    fn resolve_config(&self) -> Result<TrackerConfig> {
        let mut cfg = load_config(&self.config).context("load config")?;
        if let Some(input) = &self.input {
            cfg.input_file = input.clone();
        }
        if let Some(min_days) = self.min_days {
            cfg.min_days = min_days;
        }
        if let Some(top_k) = self.top_k {
            cfg.top_k = top_k;
        }
        if let Some(shift) = self.shift {
            cfg.shift_delta = shift;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => report_error(&err),
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = cli.resolve_config()?;
    debug!(?cfg, "config resolved");

    let mut out = io::stdout().lock();
    run_pipeline(&cfg, &mut out)?;
    out.flush().context("flush stdout")?;
    Ok(())
}

/// Print `err` to stderr and pick the matching exit code.
fn report_error(err: &anyhow::Error) -> i32 {
    eprintln!("ERROR: {err:#}");
    match err.downcast_ref::<LoadError>() {
        Some(load_err) => {
            warn!(error = %load_err, "input rejected");
            eprintln!("{}", load_err.hint());
            eprintln!("Terminating program due to input error.");
            exit_codes::INPUT_ERROR
        }
        None => exit_codes::INVALID,
    }
}
