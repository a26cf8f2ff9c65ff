//! ijlink Discovery - Broadcast discovery of printers on every local interface
//!
//! One prober runs per local IPv4 address. Each sends a `{Locate <tag>}`
//! datagram per requested device type to the broadcast address and records
//! every reply that arrives within its window into a shared collector.

pub mod collector;
pub mod interfaces;
pub mod probe;
pub mod scanner;

pub use collector::ResponseCollector;
pub use interfaces::list_broadcast_addresses;
pub use probe::{probe, BroadcastProber, DiscoveryError};
pub use scanner::{DiscoveryScanner, ScannerConfig, LOCATE_RECEIVE_PORT, LOCATE_SEND_PORT};
