use clap::Parser;
use log::{LevelFilter, debug, info};

use chartjs::cli::{Cli, Commands};
use chartjs::commands::{run_init, run_render, run_validate};

fn main() {
    let cli = Cli::parse();

    let log_level = log_level(cli.verbose, cli.quiet);
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting chartjs");
    debug!(cli:?; "Parsed arguments");

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Validate(args) => run_validate(args),
        Commands::Init(args) => run_init(args),
    };

    info!(exit_code; "Finished");
    std::process::exit(exit_code);
}

/// Warn by default; each `-v` raises the level, `-q` keeps only errors.
const fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
