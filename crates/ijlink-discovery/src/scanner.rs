//! Discovery orchestration across all local interfaces

use ijlink_core::{DeviceTypeFilter, DiscoveryReply};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::collector::ResponseCollector;
use crate::interfaces::list_broadcast_addresses;
use crate::probe::probe;

/// Port printers listen on for locate requests
pub const LOCATE_SEND_PORT: u16 = 2201;

/// Port printers answer to
pub const LOCATE_RECEIVE_PORT: u16 = 1706;

/// Default probe window in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// Scanner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Destination port of locate requests
    pub send_port: u16,
    /// Local port replies arrive on
    pub receive_port: u16,
    /// Destination address of locate requests
    pub broadcast_address: Ipv4Addr,
    /// Probe window per interface in milliseconds
    pub timeout_ms: u64,
}

impl ScannerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            send_port: LOCATE_SEND_PORT,
            receive_port: LOCATE_RECEIVE_PORT,
            broadcast_address: Ipv4Addr::BROADCAST,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Runs one prober per local interface address and aggregates replies
pub struct DiscoveryScanner {
    config: Arc<ScannerConfig>,
}

impl DiscoveryScanner {
    pub fn new(config: ScannerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Discover printers on every local IPv4 interface
    pub async fn discover(&self, filters: &[DeviceTypeFilter]) -> Vec<DiscoveryReply> {
        let addresses = list_broadcast_addresses();
        self.discover_on(&addresses, filters).await
    }

    /// Discover printers from the given local addresses.
    ///
    /// All probers run concurrently and each gets the full window from its
    /// own launch, so the call takes about one window regardless of how many
    /// addresses there are.
    pub async fn discover_on(
        &self,
        addresses: &[Ipv4Addr],
        filters: &[DeviceTypeFilter],
    ) -> Vec<DiscoveryReply> {
        let collector = ResponseCollector::new();
        self.discover_into(addresses, filters, &collector).await;
        collector.snapshot()
    }

    /// Like [`discover_on`](Self::discover_on), recording into a caller-owned
    /// collector so replies can be observed while probers are still running
    pub async fn discover_into(
        &self,
        addresses: &[Ipv4Addr],
        filters: &[DeviceTypeFilter],
        collector: &ResponseCollector,
    ) {
        info!(
            interfaces = addresses.len(),
            filters = filters.len(),
            timeout_ms = self.config.timeout_ms,
            "Starting printer discovery"
        );

        let filters: Arc<[DeviceTypeFilter]> = filters.into();
        let mut tasks = JoinSet::new();

        for &address in addresses {
            let filters = Arc::clone(&filters);
            let collector = collector.clone();
            let config = Arc::clone(&self.config);
            tasks.spawn(async move { probe(address, &filters, &collector, &config).await });
        }

        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(received) => debug!(received = received, "Prober completed"),
                Err(e) => warn!(error = %e, "Prober task failed"),
            }
        }

        info!("Discovery complete: {} replies", collector.len());
    }
}

impl Default for DiscoveryScanner {
    fn default() -> Self {
        Self::new(ScannerConfig::default())
    }
}
