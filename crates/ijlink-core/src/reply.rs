//! Replies received in answer to discovery probes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

/// One datagram received by a prober.
///
/// The payload is kept as raw text; nothing is validated beyond decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryReply {
    /// Address of the responder
    pub address: IpAddr,
    /// Raw reply text
    pub payload: String,
    /// Local interface address the reply arrived on
    pub interface: Ipv4Addr,
    /// When the reply was received
    pub received_at: DateTime<Utc>,
}

impl DiscoveryReply {
    pub fn new(address: IpAddr, payload: impl Into<String>, interface: Ipv4Addr) -> Self {
        Self {
            address,
            payload: payload.into(),
            interface,
            received_at: Utc::now(),
        }
    }
}

impl fmt::Display for DiscoveryReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.address, self.payload)
    }
}
