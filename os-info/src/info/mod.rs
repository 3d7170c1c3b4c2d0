//! Host fact collection
//!
//! Each group is queried through a [`HostProbe`]. A failing query only
//! affects its own group, which is recorded as `{ "error": <message> }`.

pub mod network;
pub mod system;
pub mod user;

use tracing::{debug, info};

use crate::error::LookupError;
use crate::types::{
    GroupResult, InfoRecord, NetworkFacts, SystemFacts, UserFacts, MINIMAL_NETWORK_FIELDS,
    MINIMAL_SYSTEM_FIELDS, MINIMAL_USER_FIELDS, NETWORK_GROUP, SYSTEM_GROUP, TIMESTAMP_FIELDS,
    USER_GROUP,
};

/// Source of host facts, one query per group
pub trait HostProbe {
    fn system_facts(&self) -> Result<SystemFacts, LookupError>;
    fn network_facts(&self) -> Result<NetworkFacts, LookupError>;
    fn user_facts(&self) -> Result<UserFacts, LookupError>;
}

/// Probe backed by the running host
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveProbe;

impl HostProbe for LiveProbe {
    fn system_facts(&self) -> Result<SystemFacts, LookupError> {
        system::get_system_facts()
    }

    fn network_facts(&self) -> Result<NetworkFacts, LookupError> {
        network::get_network_facts()
    }

    fn user_facts(&self) -> Result<UserFacts, LookupError> {
        user::get_user_facts()
    }
}

/// Options that shape the collected record
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollectOptions {
    /// Keep only the fixed minimal field set of each group
    pub minimal: bool,
    /// Drop the timestamp fields of the system group
    pub no_timestamps: bool,
}

/// Collect a record from the running host
pub fn collect(options: CollectOptions) -> InfoRecord {
    collect_with(&LiveProbe, options)
}

/// Collect a record through `probe`
pub fn collect_with<P: HostProbe + ?Sized>(probe: &P, options: CollectOptions) -> InfoRecord {
    let mut system = lookup_group(SYSTEM_GROUP, probe.system_facts());
    let mut network = lookup_group(NETWORK_GROUP, probe.network_facts());
    let mut user = lookup_group(USER_GROUP, probe.user_facts());

    if options.no_timestamps {
        system.drop_fields(&TIMESTAMP_FIELDS);
    }

    if options.minimal {
        system.keep_fields(&MINIMAL_SYSTEM_FIELDS);
        network.keep_fields(&MINIMAL_NETWORK_FIELDS);
        user.keep_fields(&MINIMAL_USER_FIELDS);
    }

    info!(
        minimal = options.minimal,
        no_timestamps = options.no_timestamps,
        "Collected host record"
    );

    InfoRecord::from_groups(system, network, user)
}

fn lookup_group<T: serde::Serialize>(name: &str, lookup: Result<T, LookupError>) -> GroupResult {
    if let Err(e) = &lookup {
        debug!(group = name, error = %e, "Group lookup failed");
    }
    GroupResult::from_lookup(lookup)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::types::NetworkInterface;

    struct MockProbe {
        fail_network: bool,
        sessions: Option<Vec<String>>,
    }

    impl MockProbe {
        fn new(fail_network: bool) -> Self {
            Self {
                fail_network,
                sessions: Some(vec!["ops".to_string(), "root".to_string()]),
            }
        }
    }

    impl HostProbe for MockProbe {
        fn system_facts(&self) -> Result<SystemFacts, LookupError> {
            Ok(SystemFacts {
                os_name: "Linux".to_string(),
                version: "24.04".to_string(),
                build_number: "6.8.0-45-generic".to_string(),
                architecture: "x86_64".to_string(),
                os_build: Some("Linux 24.04 Ubuntu".to_string()),
                install_date: Some("2024-05-01T10:00:00Z".to_string()),
                last_boot_time: "2026-10-19T07:00:00Z".to_string(),
            })
        }

        fn network_facts(&self) -> Result<NetworkFacts, LookupError> {
            if self.fail_network {
                return Err(LookupError::Unavailable("hostname"));
            }
            Ok(NetworkFacts {
                hostname: "build-01".to_string(),
                fqdn: None,
                local_ip: "10.0.0.5".to_string(),
                interfaces: vec![NetworkInterface {
                    name: "eth0".to_string(),
                    ip_address: "10.0.0.5".to_string(),
                    mac_address: Some("02:42:ac:11:00:02".to_string()),
                }],
            })
        }

        fn user_facts(&self) -> Result<UserFacts, LookupError> {
            Ok(UserFacts {
                current_user: "ops".to_string(),
                home_directory: "/home/ops".to_string(),
                working_directory: "/srv".to_string(),
                environment: BTreeMap::from([("SHELL".to_string(), "/bin/bash".to_string())]),
                all_users: self.sessions.clone(),
            })
        }
    }

    fn keys(record: &InfoRecord, group: &str) -> Vec<String> {
        record.group(group).unwrap().keys().cloned().collect()
    }

    #[test]
    fn test_full_record_field_order() {
        let record = collect_with(&MockProbe::new(false), CollectOptions::default());

        assert_eq!(
            keys(&record, SYSTEM_GROUP),
            vec![
                "os_name",
                "version",
                "build_number",
                "architecture",
                "os_build",
                "install_date",
                "last_boot_time"
            ]
        );
        assert_eq!(
            keys(&record, NETWORK_GROUP),
            vec!["hostname", "local_ip", "interfaces"]
        );
        assert_eq!(
            keys(&record, USER_GROUP),
            vec![
                "current_user",
                "home_directory",
                "working_directory",
                "environment",
                "all_users"
            ]
        );
    }

    #[test]
    fn test_minimal_projection() {
        let options = CollectOptions {
            minimal: true,
            no_timestamps: false,
        };
        let record = collect_with(&MockProbe::new(false), options);

        assert_eq!(keys(&record, SYSTEM_GROUP), vec!["os_name", "version"]);
        assert_eq!(keys(&record, NETWORK_GROUP), vec!["hostname"]);
        assert_eq!(keys(&record, USER_GROUP), vec!["current_user"]);
    }

    #[test]
    fn test_no_timestamps_only_touches_timestamps() {
        let options = CollectOptions {
            minimal: false,
            no_timestamps: true,
        };
        let record = collect_with(&MockProbe::new(false), options);
        let system = keys(&record, SYSTEM_GROUP);

        for field in TIMESTAMP_FIELDS {
            assert!(!system.iter().any(|k| k == field));
        }
        assert_eq!(system.len(), 5);
        assert_eq!(keys(&record, NETWORK_GROUP).len(), 3);
    }

    #[test]
    fn test_missing_sessions_keep_user_group() {
        let probe = MockProbe {
            sessions: None,
            ..MockProbe::new(false)
        };
        let record = collect_with(&probe, CollectOptions::default());

        assert_eq!(
            keys(&record, USER_GROUP),
            vec![
                "current_user",
                "home_directory",
                "working_directory",
                "environment"
            ]
        );
        assert_eq!(record.group(USER_GROUP).unwrap()["current_user"], "ops");
    }

    #[test]
    fn test_failed_group_keeps_others() {
        let options = CollectOptions {
            minimal: true,
            no_timestamps: true,
        };
        let record = collect_with(&MockProbe::new(true), options);

        assert_eq!(
            record.group(NETWORK_GROUP).unwrap()["error"],
            "hostname is unavailable"
        );
        assert_eq!(keys(&record, SYSTEM_GROUP), vec!["os_name", "version"]);
        assert_eq!(keys(&record, USER_GROUP), vec!["current_user"]);
    }
}
