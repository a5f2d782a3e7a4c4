//! Times the parallel and single-threaded cumulative sums and prints both.
//!
//! Run with: cargo run --release --bin parallel_sums [CONFIG.toml]

use colored::Colorize;
use log::warn;
use parallel_sums::{report, run_parallel, run_sequential, Config, ForkJoin, SumsError};
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

// Returns whether the two totals agree.
fn run() -> Result<bool, SumsError> {
    let explicit = env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load(explicit.as_deref(), Path::new("."))?;
    let fork_join = ForkJoin::from_config(&config)?;

    let parallel = run_parallel(config.max_number, &fork_join)?;
    report::print_parallel(&parallel, config.language);

    println!();

    let sequential = run_sequential(config.max_number);
    report::print_sequential(&sequential, config.language);

    if parallel.total() != sequential.total {
        warn!(
            "totals disagree: parallel {} vs sequential {}",
            parallel.total(),
            sequential.total
        );
        return Ok(false);
    }
    Ok(true)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
