//! ijlink Core - Shared types for printer discovery and remote calls
//!
//! This crate provides the value types used by the other ijlink crates:
//! - Device type filters embedded in discovery probes
//! - Discovery replies collected from the network
//! - Variants, status codes and node identifiers for the call protocol
//! - Printer endpoint helpers

pub mod endpoint;
pub mod error;
pub mod filter;
pub mod node;
pub mod reply;
pub mod status;
pub mod variant;

pub use endpoint::{endpoint_url, parse_printer_ip, DEFAULT_PRINTER_PORT};
pub use error::CoreError;
pub use filter::DeviceTypeFilter;
pub use node::{Identifier, NodeId};
pub use reply::DiscoveryReply;
pub use status::StatusCode;
pub use variant::Variant;
