//! Command implementation for the csv2latex CLI
//!
//! This module contains the conversion workflow as run from the command
//! line: configuration loading, logging setup, console reporting and the
//! mapping of failures to exit codes.

use crate::app::models::ConversionSummary;
use crate::app::services::converter::TableConverter;
use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::{APP_NAME, REQUIRED_PACKAGES};
use crate::{Error, Result};
use colored::*;
use tracing::{debug, info};

/// Exit code when the input file is missing or the configuration is invalid
pub const EXIT_INVALID_INPUT: i32 = 1;

/// Exit code when conversion started but failed
pub const EXIT_CONVERSION_FAILED: i32 = 2;

/// Main command runner
///
/// 1. Load the layered configuration and apply CLI overrides
/// 2. Set up logging
/// 3. Check the input exists before any processing
/// 4. Convert and report the outcome
pub fn run(args: Args) -> Result<ConversionSummary> {
    args.validate()?;
    let config = load_configuration(&args)?;

    setup_logging(args.get_log_level(&config.logging.level));
    info!("Starting {}", APP_NAME);
    debug!("Command line arguments: {:?}", args);
    debug!("Loaded configuration: {:?}", config);

    if args.show_progress() {
        print_run_summary(&config);
    }

    if !config.input.path.exists() {
        return Err(Error::input_not_found(&config.input.path));
    }

    match TableConverter::new().convert(&config) {
        Ok(summary) => {
            if args.show_progress() {
                print_success(&summary);
            }
            Ok(summary)
        }
        Err(e) => {
            if args.show_progress() {
                report_attempts(&e);
                println!(
                    "\n{}",
                    "Conversion failed. Check error messages above.".bright_red()
                );
            }
            Err(e)
        }
    }
}

/// Map an error to the process exit code
pub fn exit_code(error: &Error) -> i32 {
    if error.is_input_missing() || matches!(error, Error::Configuration { .. }) {
        EXIT_INVALID_INPUT
    } else {
        EXIT_CONVERSION_FAILED
    }
}

/// Load configuration using layered approach (defaults -> file -> args)
fn load_configuration(args: &Args) -> Result<Config> {
    let mut config = Config::load_layered(args.config_file.as_deref())?;
    args.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

/// Set up structured logging on stderr
fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", APP_NAME, log_level)));

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

fn print_run_summary(config: &Config) {
    println!("{}", "Converting CSV to LaTeX table:".bright_green().bold());
    println!(
        "  {} {}",
        "Input:       ".bright_cyan(),
        config.input.path.display()
    );
    println!(
        "  {} {}",
        "Output:      ".bright_cyan(),
        config.output.path.display()
    );
    println!(
        "  {} {}",
        "Landscape:   ".bright_cyan(),
        if config.table.landscape { "Yes" } else { "No" }
    );
    println!(
        "  {} {}",
        "Header lines:".bright_cyan(),
        config.table.header_lines
    );
}

fn print_success(summary: &ConversionSummary) {
    println!(
        "  {} {}",
        "Detected encoding:".bright_cyan(),
        summary.detected_encoding
    );
    println!(
        "  {} {}",
        "Read with encoding:".bright_cyan(),
        summary.encoding
    );
    println!(
        "  {} {} columns, {} header rows, {} data rows, {} partial rules",
        "Table:".bright_cyan(),
        summary.columns.to_string().bright_white().bold(),
        summary.header_rows,
        summary.data_rows.to_string().bright_white().bold(),
        summary.partial_rules
    );

    println!(
        "\n{}",
        "Successfully generated LaTeX table!".bright_green().bold()
    );
    println!("Required LaTeX packages:\n{}", REQUIRED_PACKAGES);
    println!("\nExample of how the header will look:");
    println!(
        r"Ref & Methods & data requirements & \multicolumn{{3}}{{c}}{{Predicted variables}} \\"
    );
    println!(r"& & & a & b & c \\");
}

fn report_attempts(error: &Error) {
    if let Error::Decode {
        detected_encoding,
        attempts,
        ..
    } = error
    {
        println!("  {} {}", "Detected encoding:".bright_cyan(), detected_encoding);
        for attempt in attempts {
            println!(
                "  {} {}",
                "Failed with".bright_red(),
                attempt.to_string().bright_white()
            );
        }
    }
}
