//! Configuration loading

use anyhow::Result;
use ijlink_core::{DeviceTypeFilter, DEFAULT_PRINTER_PORT};
use ijlink_discovery::{ScannerConfig, LOCATE_RECEIVE_PORT, LOCATE_SEND_PORT};
use ijlink_rpc::{DispatcherConfig, METHOD_NAMESPACE};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::path::Path;
use tracing::info;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub printer: PrinterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Port printers listen on for locate requests
    #[serde(default = "default_send_port")]
    pub send_port: u16,
    /// Local port replies arrive on
    #[serde(default = "default_receive_port")]
    pub receive_port: u16,
    /// Destination of locate requests
    #[serde(default = "default_broadcast_address")]
    pub broadcast_address: Ipv4Addr,
    /// Probe window per interface in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Device types to ask for
    #[serde(default = "default_filters")]
    pub filters: Vec<DeviceTypeFilter>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            send_port: default_send_port(),
            receive_port: default_receive_port(),
            broadcast_address: default_broadcast_address(),
            timeout_ms: default_timeout_ms(),
            filters: default_filters(),
        }
    }
}

fn default_send_port() -> u16 {
    LOCATE_SEND_PORT
}

fn default_receive_port() -> u16 {
    LOCATE_RECEIVE_PORT
}

fn default_broadcast_address() -> Ipv4Addr {
    Ipv4Addr::BROADCAST
}

fn default_timeout_ms() -> u64 {
    2000
}

fn default_filters() -> Vec<DeviceTypeFilter> {
    DeviceTypeFilter::ALL.to_vec()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrinterConfig {
    /// Printer address
    #[serde(default = "default_ip")]
    pub ip: Ipv4Addr,
    /// Call service port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Time to wait for a call response in milliseconds
    #[serde(default = "default_call_timeout_ms")]
    pub call_timeout_ms: u64,
    /// Namespace index of printer methods
    #[serde(default = "default_method_namespace")]
    pub method_namespace: u16,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            ip: default_ip(),
            port: default_port(),
            call_timeout_ms: default_call_timeout_ms(),
            method_namespace: default_method_namespace(),
        }
    }
}

fn default_ip() -> Ipv4Addr {
    Ipv4Addr::new(10, 1, 2, 3)
}

fn default_port() -> u16 {
    DEFAULT_PRINTER_PORT
}

fn default_call_timeout_ms() -> u64 {
    5000
}

fn default_method_namespace() -> u16 {
    METHOD_NAMESPACE
}

impl Config {
    pub fn to_scanner_config(&self) -> ScannerConfig {
        ScannerConfig {
            send_port: self.discovery.send_port,
            receive_port: self.discovery.receive_port,
            broadcast_address: self.discovery.broadcast_address,
            timeout_ms: self.discovery.timeout_ms,
        }
    }

    pub fn to_dispatcher_config(&self) -> DispatcherConfig {
        DispatcherConfig {
            method_namespace: self.printer.method_namespace,
            call_timeout_ms: self.printer.call_timeout_ms,
        }
    }
}

/// Load configuration from file, falling back to defaults when it is missing
pub fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    } else {
        info!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        Ok(Config::default())
    }
}
