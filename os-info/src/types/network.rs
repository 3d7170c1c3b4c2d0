//! Network group types

use serde::{Deserialize, Serialize};

/// Fields the network group keeps in minimal mode
pub const MINIMAL_NETWORK_FIELDS: [&str; 1] = ["hostname"];

/// Value recorded for `local_ip` when the outbound probe fails
pub const LOCAL_IP_FALLBACK: &str = "unknown";

/// Network facts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkFacts {
    /// Hostname
    pub hostname: String,
    /// Fully qualified domain name, when the hostname already is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
    /// Address used for outbound traffic, or [`LOCAL_IP_FALLBACK`]
    pub local_ip: String,
    /// IPv4-capable interfaces, ordered by name
    pub interfaces: Vec<NetworkInterface>,
}

/// Individual network interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInterface {
    /// Interface name (e.g., "eth0", "wlan0", "en0")
    pub name: String,
    /// First IPv4 address assigned to this interface
    pub ip_address: String,
    /// Hardware address, absent for interfaces without one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
}
