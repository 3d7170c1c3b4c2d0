//! CLI argument definitions

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::error::OsInfoResult;
use crate::formatter::OutputFormat;
use crate::info::CollectOptions;

#[derive(Parser, Debug)]
#[command(name = "os-info")]
#[command(about = "Collect OS, network, and user facts for this host")]
pub struct Cli {
    /// Output format: json, yaml, csv, or minimal
    #[arg(long, env = "OS_INFO_FORMAT", default_value = "json")]
    pub format: String,

    /// Write to this file instead of standard output
    #[arg(long, env = "OS_INFO_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Indented JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Collect only the minimal field set
    #[arg(long)]
    pub minimal: bool,

    /// Omit timestamp fields from the system group
    #[arg(long)]
    pub no_timestamps: bool,

    /// Force UTF-8 output (output is always written as UTF-8)
    #[arg(long)]
    pub utf8: bool,

    /// Suppress the error message on failure
    #[arg(long, short)]
    pub quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Requested renderer; fails for unsupported names
    pub fn output_format(&self) -> OsInfoResult<OutputFormat> {
        self.format.parse()
    }

    pub fn collect_options(&self) -> CollectOptions {
        CollectOptions {
            minimal: self.minimal,
            no_timestamps: self.no_timestamps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OsInfoError;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["os-info"]).unwrap();
        assert_eq!(cli.output_format().unwrap(), OutputFormat::Json);
        assert_eq!(cli.collect_options(), CollectOptions::default());
        assert!(cli.output.is_none());
        assert!(!cli.pretty && !cli.quiet && !cli.utf8);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "os-info",
            "--format",
            "csv",
            "--output",
            "/tmp/report.csv",
            "--pretty",
            "--minimal",
            "--no-timestamps",
            "--utf8",
            "--quiet",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.output_format().unwrap(), OutputFormat::Csv);
        assert_eq!(
            cli.collect_options(),
            CollectOptions {
                minimal: true,
                no_timestamps: true
            }
        );
        assert_eq!(cli.output, Some(PathBuf::from("/tmp/report.csv")));
        assert!(cli.pretty && cli.quiet && cli.utf8);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unsupported_format_is_invalid_format() {
        let cli = Cli::try_parse_from(["os-info", "--format", "xml"]).unwrap();
        assert!(matches!(
            cli.output_format(),
            Err(OsInfoError::InvalidFormat(ref v)) if v == "xml"
        ));
    }
}
