//! Broadcast probing from a single local interface address

use ijlink_core::{DeviceTypeFilter, DiscoveryReply};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use thiserror::Error;
use tokio::net::UdpSocket;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, trace, warn};

use crate::collector::ResponseCollector;
use crate::scanner::ScannerConfig;

/// Receive buffer size for a single reply datagram
const MAX_REPLY_LEN: usize = 4096;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Failed to bind {0}: {1}")]
    Bind(SocketAddrV4, #[source] std::io::Error),
    #[error("Socket error: {0}")]
    Socket(#[from] std::io::Error),
}

/// UDP endpoint bound to one local address for the lifetime of one probe.
///
/// The socket is owned by the prober and dropped when [`run`](Self::run)
/// returns, on every path.
pub struct BroadcastProber {
    socket: UdpSocket,
    interface: Ipv4Addr,
    target: SocketAddrV4,
    deadline: Instant,
}

impl BroadcastProber {
    /// Bind the receive port on `interface` with broadcast enabled.
    ///
    /// The probe window starts here.
    pub async fn bind(interface: Ipv4Addr, config: &ScannerConfig) -> Result<Self, DiscoveryError> {
        let deadline = Instant::now() + config.timeout();
        let local = SocketAddrV4::new(interface, config.receive_port);
        let socket = UdpSocket::bind(local)
            .await
            .map_err(|e| DiscoveryError::Bind(local, e))?;
        socket.set_broadcast(true)?;

        Ok(Self {
            socket,
            interface,
            target: SocketAddrV4::new(config.broadcast_address, config.send_port),
            deadline,
        })
    }

    /// Address the endpoint is actually bound to
    pub fn local_addr(&self) -> Result<SocketAddr, DiscoveryError> {
        Ok(self.socket.local_addr()?)
    }

    /// Send one probe per filter, then record replies until the window ends.
    ///
    /// Returns the number of replies this prober recorded.
    pub async fn run(self, filters: &[DeviceTypeFilter], collector: &ResponseCollector) -> usize {
        for filter in filters {
            let request = filter.locate_request();
            match self.socket.send_to(request.as_bytes(), self.target).await {
                Ok(_) => trace!(
                    interface = %self.interface,
                    target = %self.target,
                    request = %request,
                    "Sent locate request"
                ),
                Err(e) => warn!(
                    interface = %self.interface,
                    filter = %filter,
                    error = %e,
                    "Failed to send locate request"
                ),
            }
        }

        let mut received = 0;
        let receive = receive_replies(&self.socket, self.interface, collector, &mut received);
        match timeout_at(self.deadline, receive).await {
            Ok(Err(e)) => {
                debug!(interface = %self.interface, error = %e, "Receive loop ended early");
            }
            Ok(Ok(())) => {}
            // Window elapsed; the receive future is dropped here
            Err(_) => {
                trace!(interface = %self.interface, "Probe window elapsed");
            }
        }

        debug!(interface = %self.interface, received = received, "Prober finished");
        received
    }
}

/// Read datagrams until an error; each reply is appended as it arrives
async fn receive_replies(
    socket: &UdpSocket,
    interface: Ipv4Addr,
    collector: &ResponseCollector,
    received: &mut usize,
) -> std::io::Result<()> {
    let mut buf = vec![0u8; MAX_REPLY_LEN];
    loop {
        let (len, from) = socket.recv_from(&mut buf).await?;
        let payload = String::from_utf8_lossy(&buf[..len]).into_owned();

        debug!(from = %from.ip(), interface = %interface, len = len, "Received discovery reply");
        trace!(from = %from.ip(), reply = %payload, "Reply payload");

        collector.append(DiscoveryReply::new(from.ip(), payload, interface));
        *received += 1;
    }
}

/// Probe from one interface address. Never fails: an address that cannot
/// be bound is skipped.
pub async fn probe(
    interface: Ipv4Addr,
    filters: &[DeviceTypeFilter],
    collector: &ResponseCollector,
    config: &ScannerConfig,
) -> usize {
    match BroadcastProber::bind(interface, config).await {
        Ok(prober) => prober.run(filters, collector).await,
        Err(e) => {
            debug!(interface = %interface, error = %e, "Skipping interface");
            0
        }
    }
}
