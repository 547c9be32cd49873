use std::env;
use std::process::ExitCode;

use colored::Colorize;
use tracing::{error, info};

use roundrobin::selftest::{format_outcome, format_summary, run_default_suite};
use roundrobin::Config;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config = match env::args().nth(1) {
        Some(path) => {
            info!("Loading config from {}", path);
            match Config::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    error!("Invalid config: {}", e);
                    eprintln!("{} {}", "error:".red().bold(), e);
                    return ExitCode::FAILURE;
                }
            }
        }
        None => Config::default(),
    };

    let outcomes = match run_default_suite(&config) {
        Ok(outcomes) => outcomes,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    for outcome in &outcomes {
        println!("{}", format_outcome(outcome));
    }
    println!("{}", format_summary(&outcomes));

    if outcomes.iter().all(|o| o.passed) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
