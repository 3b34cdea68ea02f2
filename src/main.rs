use std::error::Error;
use std::process;

use colored::*;
use tracing::{error, info};

use gc2gh::cli::build_cli;
use gc2gh::commands::{handle_migrate, run_interruptible};
use gc2gh::config::MigrationConfig;
use gc2gh::error::MigrationError;
use gc2gh::logging::init_logging;
use gc2gh::migrate::MigrationSummary;

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    let config = match MigrationConfig::from_matches(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(e.exit_code());
        }
    };

    match init_logging(config.verbosity, config.quiet, config.save_log) {
        Ok(Some(path)) => info!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(e.exit_code());
        }
    }

    let result = match run_interruptible(handle_migrate(&config), tokio::signal::ctrl_c()).await {
        Some(result) => result,
        None => {
            info!("user interrupt");
            process::exit(130);
        }
    };

    match result {
        Ok(summary) => print_summary(&summary, config.dry_run),
        Err(e) => {
            report_error(&e);
            process::exit(e.exit_code());
        }
    }
}

fn report_error(e: &MigrationError) {
    if e.is_expected() {
        error!("{}", e);
        return;
    }

    error!("unexpected error: {:?}", e);
    let mut source = e.source();
    while let Some(cause) = source {
        error!("caused by: {}", cause);
        source = cause.source();
    }
}

fn print_summary(summary: &MigrationSummary, dry_run: bool) {
    let verb = if dry_run { "converted" } else { "submitted" };
    println!(
        "{} {} issues {} ({} from the export, {} placeholders), {} skipped",
        "✅".green(),
        summary.submitted().to_string().bold(),
        verb,
        summary.converted,
        summary.placeholders,
        summary.skipped.to_string().dimmed()
    );
}
