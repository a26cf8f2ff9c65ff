//! Errors for core value parsing

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid printer IP address: {0}")]
    InvalidIp(String),
    #[error("Unknown device type filter: {0}")]
    UnknownFilter(String),
    #[error("Invalid node id: {0}")]
    InvalidNodeId(String),
}
