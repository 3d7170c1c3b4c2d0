//! Record rendering
//!
//! Renders an [`InfoRecord`] as JSON, YAML, CSV, or a short text summary.

mod csv;
mod text;

use std::fmt;
use std::str::FromStr;

use crate::error::{OsInfoError, OsInfoResult};
use crate::types::InfoRecord;

pub use csv::{flatten, CSV_HEADER};
pub use text::UNKNOWN;

/// Output format for the rendered record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON, compact or pretty
    #[default]
    Json,
    /// Block-style YAML
    Yaml,
    /// Two-column `Key,Value` rows
    Csv,
    /// Human-readable summary lines
    Minimal,
}

impl FromStr for OutputFormat {
    type Err = OsInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            "minimal" | "text" => Ok(Self::Minimal),
            _ => Err(OsInfoError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
            Self::Minimal => "minimal",
        };
        f.write_str(name)
    }
}

/// Record renderer
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    format: OutputFormat,
    pretty: bool,
}

impl Formatter {
    /// Create a formatter; `pretty` only affects JSON
    pub fn new(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render the record
    pub fn render(&self, record: &InfoRecord) -> OsInfoResult<String> {
        match self.format {
            OutputFormat::Json => self.render_json(record),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(record)?),
            OutputFormat::Csv => Ok(csv::render(record)),
            OutputFormat::Minimal => Ok(text::render(record)),
        }
    }

    fn render_json(&self, record: &InfoRecord) -> OsInfoResult<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(record)?
        } else {
            serde_json::to_string(record)?
        };
        Ok(json)
    }
}

/// Render `record` in `format`
pub fn format_record(record: &InfoRecord, format: OutputFormat, pretty: bool) -> OsInfoResult<String> {
    Formatter::new(format, pretty).render(record)
}
