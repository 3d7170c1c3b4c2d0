//! Network information collection

use std::io;
use std::net::{IpAddr, UdpSocket};

use sysinfo::{IpNetwork, MacAddr, Networks, System};
use tracing::debug;

use crate::error::LookupError;
use crate::types::{NetworkFacts, NetworkInterface, LOCAL_IP_FALLBACK};

/// Public address used to pick the outbound route; nothing is sent to it
const OUTBOUND_PROBE_TARGET: &str = "8.8.8.8:80";

/// Get network facts
pub fn get_network_facts() -> Result<NetworkFacts, LookupError> {
    let hostname = System::host_name().ok_or(LookupError::Unavailable("hostname"))?;
    let fqdn = fqdn_of(&hostname);

    Ok(NetworkFacts {
        hostname,
        fqdn,
        local_ip: local_ip(),
        interfaces: get_ipv4_interfaces(),
    })
}

/// Interfaces with at least one IPv4 address, sorted by name
pub fn get_ipv4_interfaces() -> Vec<NetworkInterface> {
    let networks = Networks::new_with_refreshed_list();

    let mut interfaces: Vec<NetworkInterface> = networks
        .iter()
        .filter_map(|(name, data)| interface_entry(name, data.ip_networks(), data.mac_address()))
        .collect();

    interfaces.sort_by(|a, b| a.name.cmp(&b.name));
    interfaces
}

/// Only an already-qualified hostname counts as an FQDN
fn fqdn_of(hostname: &str) -> Option<String> {
    hostname.contains('.').then(|| hostname.to_string())
}

/// Entry for one interface, or `None` when it has no IPv4 address
fn interface_entry(name: &str, ips: &[IpNetwork], mac: MacAddr) -> Option<NetworkInterface> {
    let ipv4 = ips.iter().find_map(|ip| match ip.addr {
        IpAddr::V4(addr) => Some(addr),
        IpAddr::V6(_) => None,
    })?;

    Some(NetworkInterface {
        name: name.to_string(),
        ip_address: ipv4.to_string(),
        mac_address: (!mac.is_unspecified()).then(|| mac.to_string()),
    })
}

/// Outbound address, or [`LOCAL_IP_FALLBACK`] when it cannot be determined
pub fn local_ip() -> String {
    match probe_outbound_ip(OUTBOUND_PROBE_TARGET) {
        Ok(addr) => addr.to_string(),
        Err(e) => {
            debug!(target_addr = OUTBOUND_PROBE_TARGET, error = %e, "Outbound IP probe failed");
            LOCAL_IP_FALLBACK.to_string()
        }
    }
}

/// Connect a UDP socket to `target` and read back the local address the OS chose
fn probe_outbound_ip(target: &str) -> io::Result<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.connect(target)?;
    let addr = socket.local_addr()?.ip();

    if addr.is_unspecified() {
        return Err(io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            "no outbound route",
        ));
    }
    Ok(addr)
}
