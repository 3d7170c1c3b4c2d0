//! Short human-readable summary

use serde_json::Value;

use crate::types::{InfoRecord, NETWORK_GROUP, SYSTEM_GROUP, USER_GROUP};

/// Placeholder for a field the record does not carry
pub const UNKNOWN: &str = "Unknown";

pub(super) fn render(record: &InfoRecord) -> String {
    let os = lookup(record, SYSTEM_GROUP, &["os_name", "platform"]);
    let version = lookup(record, SYSTEM_GROUP, &["version"]).unwrap_or_default();
    let machine = lookup(record, SYSTEM_GROUP, &["architecture", "machine"]);
    let hostname = lookup(record, NETWORK_GROUP, &["hostname"]);
    let local_ip = lookup(record, NETWORK_GROUP, &["local_ip"]);
    let user = lookup(record, USER_GROUP, &["current_user", "username"]);
    let home = lookup(record, USER_GROUP, &["home_directory"]);

    let mut lines = vec![
        format!("OS: {} {}", or_unknown(os), version),
        format!("Machine: {}", or_unknown(machine)),
        format!("Hostname: {}", or_unknown(hostname)),
    ];
    if let Some(ip) = local_ip {
        lines.push(format!("Local IP: {ip}"));
    }
    lines.push(format!("User: {}", or_unknown(user)));
    lines.push(format!("Home: {}", or_unknown(home)));

    lines.join("\n")
}

fn lookup(record: &InfoRecord, group: &str, names: &[&str]) -> Option<String> {
    match record.field(group, names)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn or_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_alias_record() {
        let record = InfoRecord::try_from(json!({
            "system": {"platform": "X-1", "machine": "M"},
            "network": {"hostname": "h", "local_ip": "1.2.3.4"},
            "user": {"username": "u", "home_directory": "/home/u"}
        }))
        .unwrap();

        assert_eq!(
            render(&record),
            "OS: X-1 \nMachine: M\nHostname: h\nLocal IP: 1.2.3.4\nUser: u\nHome: /home/u"
        );
    }

    #[test]
    fn test_render_collected_field_names() {
        let record = InfoRecord::try_from(json!({
            "system": {"os_name": "Ubuntu", "version": "24.04", "architecture": "aarch64"},
            "network": {"hostname": "pi", "local_ip": "unknown"},
            "user": {"current_user": "ops", "home_directory": "/home/ops"}
        }))
        .unwrap();

        assert_eq!(
            render(&record),
            "OS: Ubuntu 24.04\nMachine: aarch64\nHostname: pi\nLocal IP: unknown\nUser: ops\nHome: /home/ops"
        );
    }

    #[test]
    fn test_render_missing_fields_as_unknown() {
        let record = InfoRecord::try_from(json!({
            "system": {"error": "boom"},
            "network": {"hostname": "h"},
            "user": {"current_user": "u"}
        }))
        .unwrap();

        assert_eq!(
            render(&record),
            "OS: Unknown \nMachine: Unknown\nHostname: h\nUser: u\nHome: Unknown"
        );
    }
}
