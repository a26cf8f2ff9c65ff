//! Local interface enumeration

use network_interface::{NetworkInterface, NetworkInterfaceConfig};
use std::net::{IpAddr, Ipv4Addr};
use tracing::{debug, warn};

/// List every unicast IPv4 address bound to a local interface.
///
/// An interface with several IPv4 bindings yields one entry per binding.
/// Enumeration failure is logged and yields an empty list.
pub fn list_broadcast_addresses() -> Vec<Ipv4Addr> {
    let interfaces = match NetworkInterface::show() {
        Ok(interfaces) => interfaces,
        Err(e) => {
            warn!(error = %e, "Failed to enumerate network interfaces");
            return Vec::new();
        }
    };

    let mut addresses = Vec::new();
    for iface in &interfaces {
        for addr in &iface.addr {
            if let Some(ip) = unicast_v4(addr.ip()) {
                debug!(interface = %iface.name, ip = %ip, "Found IPv4 binding");
                addresses.push(ip);
            }
        }
    }

    debug!("Found {} IPv4 interface addresses", addresses.len());
    addresses
}

/// Keep IPv4 unicast addresses only
fn unicast_v4(ip: IpAddr) -> Option<Ipv4Addr> {
    match ip {
        IpAddr::V4(v4) if !v4.is_unspecified() && !v4.is_multicast() && !v4.is_broadcast() => {
            Some(v4)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    #[test]
    fn test_unicast_v4() {
        assert_eq!(
            unicast_v4(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 20))),
            Some(Ipv4Addr::new(192, 168, 1, 20))
        );
        assert_eq!(
            unicast_v4(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            Some(Ipv4Addr::LOCALHOST)
        );
        assert_eq!(unicast_v4(IpAddr::V6(Ipv6Addr::LOCALHOST)), None);
        assert_eq!(unicast_v4(IpAddr::V4(Ipv4Addr::UNSPECIFIED)), None);
        assert_eq!(unicast_v4(IpAddr::V4(Ipv4Addr::new(224, 0, 0, 251))), None);
        assert_eq!(unicast_v4(IpAddr::V4(Ipv4Addr::BROADCAST)), None);
    }

    #[test]
    fn test_list_is_ipv4_only() {
        // Host dependent; only the shape of the result is checked
        for ip in list_broadcast_addresses() {
            assert!(!ip.is_unspecified());
            assert!(!ip.is_multicast());
        }
    }
}
