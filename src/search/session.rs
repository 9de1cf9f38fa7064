use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Serializes keystroke-driven searches: each keystroke takes a ticket, and
/// only the newest ticket survives its debounce window.
///
/// The fetch itself is not cancelled; instead the caller re-checks
/// [`SearchTicket::is_current`] after the response arrives, so a slow,
/// stale request can never overwrite fresher results.
#[derive(Debug, Clone)]
pub struct SearchSession {
    latest: Arc<AtomicU64>,
    debounce: Duration,
}

impl SearchSession {
    pub fn new(debounce: Duration) -> Self {
        Self {
            latest: Arc::new(AtomicU64::new(0)),
            debounce,
        }
    }

    /// Registers a new invocation, superseding every earlier ticket.
    pub fn begin(&self) -> SearchTicket {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        SearchTicket {
            seq,
            latest: Arc::clone(&self.latest),
            debounce: self.debounce,
        }
    }
}

#[derive(Debug)]
pub struct SearchTicket {
    seq: u64,
    latest: Arc<AtomicU64>,
    debounce: Duration,
}

impl SearchTicket {
    /// Waits out the debounce window. `false` means another keystroke
    /// arrived in the meantime and this invocation should be dropped.
    pub async fn wait(&self) -> bool {
        tokio::time::sleep(self.debounce).await;
        self.is_current()
    }

    /// Check again once the (possibly slow) fetch returns, before applying
    /// its results.
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.seq
    }
}
