//! Shared accumulator for discovery replies

use ijlink_core::DiscoveryReply;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;

/// Append-only, thread-safe list of replies shared by all probers.
///
/// Clones share the same underlying list. Entries keep arrival order and
/// are never deduplicated: the same printer answering on two interfaces
/// yields two entries.
#[derive(Debug, Clone)]
pub struct ResponseCollector {
    entries: Arc<Mutex<Vec<DiscoveryReply>>>,
    event_tx: broadcast::Sender<DiscoveryReply>,
}

impl ResponseCollector {
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(100);
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            event_tx,
        }
    }

    /// Record a reply; it is visible to `snapshot` and subscribers immediately
    pub fn append(&self, reply: DiscoveryReply) {
        self.lock().push(reply.clone());
        let _ = self.event_tx.send(reply);
    }

    /// Ordered copy of everything recorded so far
    pub fn snapshot(&self) -> Vec<DiscoveryReply> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Receive replies as they are appended
    pub fn subscribe(&self) -> broadcast::Receiver<DiscoveryReply> {
        self.event_tx.subscribe()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<DiscoveryReply>> {
        // A panicking appender cannot leave a half-pushed entry behind
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ResponseCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    fn reply(last: u8, payload: &str) -> DiscoveryReply {
        DiscoveryReply::new(
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, last)),
            payload,
            Ipv4Addr::new(10, 0, 0, 1),
        )
    }

    #[test]
    fn test_keeps_arrival_order() {
        let collector = ResponseCollector::new();
        collector.append(reply(3, "c"));
        collector.append(reply(1, "a"));
        collector.append(reply(2, "b"));

        let payloads: Vec<_> = collector.snapshot().into_iter().map(|r| r.payload).collect();
        assert_eq!(payloads, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_no_dedup_across_addresses() {
        let collector = ResponseCollector::new();
        collector.append(reply(5, "{ALP}"));
        collector.append(reply(6, "{ALP}"));
        collector.append(reply(5, "{ALP}"));
        assert_eq!(collector.len(), 3);
    }

    #[test]
    fn test_clones_share_entries() {
        let collector = ResponseCollector::new();
        let other = collector.clone();
        other.append(reply(9, "x"));
        assert_eq!(collector.len(), 1);
        assert!(!collector.is_empty());
    }

    #[test]
    fn test_concurrent_appends_are_not_lost() {
        let collector = ResponseCollector::new();
        let handles: Vec<_> = (0..8u8)
            .map(|t| {
                let collector = collector.clone();
                std::thread::spawn(move || {
                    for i in 0..250 {
                        collector.append(reply(t, &format!("{}-{}", t, i)));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = collector.snapshot();
        assert_eq!(snapshot.len(), 2000);
        // Per-writer order survives interleaving
        for t in 0..8u8 {
            let seq: Vec<_> = snapshot
                .iter()
                .filter(|r| r.address == IpAddr::V4(Ipv4Addr::new(10, 0, 0, t)))
                .map(|r| r.payload.clone())
                .collect();
            let expected: Vec<_> = (0..250).map(|i| format!("{}-{}", t, i)).collect();
            assert_eq!(seq, expected);
        }
    }

    #[tokio::test]
    async fn test_subscribe_sees_appends() {
        let collector = ResponseCollector::new();
        let mut rx = collector.subscribe();
        collector.append(reply(7, "hello"));
        let got = rx.recv().await.unwrap();
        assert_eq!(got.payload, "hello");
    }
}
