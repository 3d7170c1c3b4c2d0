//! OS information collection

use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};
use sysinfo::System;
use tracing::debug;

use crate::error::LookupError;
use crate::types::SystemFacts;

/// Get operating system facts
pub fn get_system_facts() -> Result<SystemFacts, LookupError> {
    let build_number = System::kernel_version().ok_or(LookupError::Unavailable("kernel release"))?;
    let os_name = System::name().unwrap_or_else(|| std::env::consts::OS.to_string());
    let version = System::os_version().unwrap_or_else(|| build_number.clone());

    let boot_time = System::boot_time();
    let last_boot_time = DateTime::<Utc>::from_timestamp(boot_time as i64, 0)
        .map(format_timestamp)
        .ok_or(LookupError::Unavailable("boot time"))?;

    Ok(SystemFacts {
        os_name,
        version,
        build_number,
        architecture: std::env::consts::ARCH.to_string(),
        os_build: System::long_os_version(),
        install_date: install_date(),
        last_boot_time,
    })
}

/// Best-effort install time: creation time of the system root
fn install_date() -> Option<String> {
    let root = if cfg!(windows) {
        Path::new("C:\\Windows")
    } else {
        Path::new("/")
    };

    match root.metadata().and_then(|meta| meta.created()) {
        Ok(created) => install_date_from(created),
        Err(e) => {
            debug!(root = %root.display(), error = %e, "Install date unavailable");
            None
        }
    }
}

/// Some filesystems report a zero birth time instead of failing
fn install_date_from(created: SystemTime) -> Option<String> {
    if created <= SystemTime::UNIX_EPOCH {
        debug!("Root creation time is not set");
        return None;
    }
    Some(format_timestamp(DateTime::<Utc>::from(created)))
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
