//! System group types

use serde::{Deserialize, Serialize};

/// Fields that `--no-timestamps` strips from the system group
pub const TIMESTAMP_FIELDS: [&str; 2] = ["install_date", "last_boot_time"];

/// Fields the system group keeps in minimal mode
pub const MINIMAL_SYSTEM_FIELDS: [&str; 2] = ["os_name", "version"];

/// Operating system facts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemFacts {
    /// OS name (e.g., "Ubuntu", "Windows", "Darwin")
    pub os_name: String,
    /// OS version
    pub version: String,
    /// Kernel release / build identifier
    pub build_number: String,
    /// CPU architecture (e.g., "x86_64", "aarch64")
    pub architecture: String,
    /// Detailed build description, when the platform provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_build: Option<String>,
    /// OS install time (RFC 3339), when the platform exposes it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_date: Option<String>,
    /// Boot time (RFC 3339)
    pub last_boot_time: String,
}
