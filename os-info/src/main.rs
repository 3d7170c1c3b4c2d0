//! os-info
//!
//! Collects OS, network, and user facts for this host and prints them as
//! JSON, YAML, CSV, or a short text summary.
//!
//! # Usage
//!
//! ```text
//! os-info --format yaml
//! os-info --pretty --no-timestamps --output host.json
//! os-info --format minimal
//! ```
//!
//! Exits 0 on success and 1 on any error or interruption.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use os_info::cli::Cli;
use os_info::init::init_tracing;
use os_info::output::write_output;
use os_info::{collect, Formatter, OsInfoError, OsInfoResult};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help and --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let quiet = std::env::args().any(|arg| arg == "--quiet" || arg == "-q");
            report(&usage_error_line(&e), quiet);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(cli.verbose, cli.quiet) {
        report(&e.to_string(), cli.quiet);
        return ExitCode::FAILURE;
    }

    let quiet = cli.quiet;
    if let Err(e) = ctrlc::set_handler(move || {
        report(&OsInfoError::Interrupted.to_string(), quiet);
        std::process::exit(1);
    }) {
        debug!("Failed to set Ctrl-C handler: {}", e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "Run failed");
            report(&e.to_string(), cli.quiet);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> OsInfoResult<()> {
    // Reject the format before touching the host or the output path
    let format = cli.output_format()?;
    if cli.utf8 {
        debug!("UTF-8 output requested");
    }

    let record = collect(cli.collect_options());
    let formatter = Formatter::new(format, cli.pretty);
    let rendered = formatter.render(&record)?;
    write_output(&rendered, cli.output.as_deref())?;

    info!(format = %formatter.format(), "Report written");
    Ok(())
}

/// First line of a clap usage error, without clap's own prefix
fn usage_error_line(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).trim().to_string()
}

/// Print the single user-visible error line
fn report(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("Error: {}", message);
    }
}
