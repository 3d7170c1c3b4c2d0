//! OS Info Library
//!
//! Collects operating-system, network, and user facts from the local host
//! and renders them as JSON, YAML, CSV, or a short text summary.
//!
//! # Usage as Library
//!
//! ```rust,no_run
//! use os_info::{collect, format_record, CollectOptions, OutputFormat};
//!
//! let record = collect(CollectOptions::default());
//! let json = format_record(&record, OutputFormat::Json, true)?;
//! println!("{json}");
//! # Ok::<(), os_info::OsInfoError>(())
//! ```
//!
//! # Usage as Binary
//!
//! `os-info --format yaml --no-timestamps`

pub mod cli;
pub mod error;
pub mod formatter;
pub mod info;
pub mod init;
pub mod output;
pub mod types;

pub use error::{LookupError, OsInfoError, OsInfoResult};
pub use formatter::{format_record, Formatter, OutputFormat};
pub use info::{collect, collect_with, CollectOptions, HostProbe, LiveProbe};
pub use types::{GroupResult, InfoRecord};
