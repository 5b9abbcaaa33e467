use clap::Parser;
use tracing_subscriber::EnvFilter;

use mem8_explorer::AppError;
use mem8_explorer::cli::{Cli, run};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn failure_message(error: &AppError) -> String {
    format!("mem8: {}", error)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", failure_message(&e));
        std::process::exit(1);
    }
}
