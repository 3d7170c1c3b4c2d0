//! User and session information collection

use std::collections::BTreeMap;
use std::process::Command;

use tracing::debug;

use crate::error::LookupError;
use crate::types::{UserFacts, SELECTED_ENV_VARS};

#[cfg(windows)]
const SESSION_PROGRAM: (&str, &[&str]) = ("query", &["user"]);
#[cfg(not(windows))]
const SESSION_PROGRAM: (&str, &[&str]) = ("who", &[]);

/// Get user facts for the running process
pub fn get_user_facts() -> Result<UserFacts, LookupError> {
    let current_user = current_username().ok_or(LookupError::Unavailable("current user"))?;
    let home_directory = dirs::home_dir().ok_or(LookupError::Unavailable("home directory"))?;
    let working_directory = std::env::current_dir().map_err(|source| LookupError::Io {
        what: "working directory",
        source,
    })?;

    Ok(UserFacts {
        current_user,
        home_directory: home_directory.to_string_lossy().to_string(),
        working_directory: working_directory.to_string_lossy().to_string(),
        environment: selected_environment(),
        all_users: session_users(SESSION_PROGRAM),
    })
}

/// Name of the effective user, from the account database when possible
fn current_username() -> Option<String> {
    account_username().or_else(|| {
        ["USER", "USERNAME"]
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
    })
}

#[cfg(unix)]
fn account_username() -> Option<String> {
    // SAFETY: geteuid has no preconditions and cannot fail.
    let uid = unsafe { libc::geteuid() };
    let users = sysinfo::Users::new_with_refreshed_list();
    let name = users
        .list()
        .iter()
        .find(|user| **user.id() == uid)
        .map(|user| user.name().to_string());

    if name.is_none() {
        debug!(uid, "Effective uid not found in account database");
    }
    name
}

#[cfg(not(unix))]
fn account_username() -> Option<String> {
    None
}

fn selected_environment() -> BTreeMap<String, String> {
    SELECTED_ENV_VARS
        .iter()
        .filter_map(|name| {
            std::env::var(name)
                .ok()
                .map(|value| (name.to_string(), value))
        })
        .collect()
}

/// Usernames with an active session, or `None` when the listing is unavailable
fn session_users((program, args): (&'static str, &[&str])) -> Option<Vec<String>> {
    match logged_in_users(program, args) {
        Ok(users) => Some(users),
        Err(e) => {
            debug!(error = %e, "Session listing unavailable");
            None
        }
    }
}

fn logged_in_users(program: &'static str, args: &[&str]) -> Result<Vec<String>, LookupError> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| LookupError::Spawn { program, source })?;

    // `query user` exits 1 when nobody is logged in
    if !output.status.success() && !(cfg!(windows) && output.stdout.is_empty()) {
        return Err(LookupError::CommandFailed {
            program,
            status: output.status,
        });
    }

    let listing = String::from_utf8_lossy(&output.stdout);
    Ok(parse_session_users(&listing, cfg!(windows)))
}

/// Usernames from a session listing, de-duplicated in first-seen order
///
/// Each line starts with the username. `query user` output carries a header
/// line and marks the caller's session with a leading `>`.
fn parse_session_users(listing: &str, has_header: bool) -> Vec<String> {
    let mut users: Vec<String> = Vec::new();

    for line in listing.lines().skip(usize::from(has_header)) {
        let Some(name) = line.split_whitespace().next() else {
            continue;
        };
        let name = name.trim_start_matches('>');
        if !name.is_empty() && !users.iter().any(|u| u == name) {
            users.push(name.to_string());
        }
    }

    users
}
