use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_millis(500);

/// How long to wait between readiness checks, and how many to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub interval: Duration,
    /// `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    pub fn fixed(interval: Duration) -> Self {
        Self {
            interval,
            max_attempts: None,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts.max(1));
        self
    }

    fn is_exhausted(&self, attempts: u32) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(DEFAULT_RETRY_INTERVAL)
    }
}

/// Result of waiting on a [`ReadinessGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyWait {
    Ready { attempts: u32 },
    Cancelled,
    GaveUp { attempts: u32 },
}

/// Signal-once readiness handle shared between an engine and its callers.
#[derive(Debug, Clone)]
pub struct ReadinessGate {
    tx: Arc<watch::Sender<bool>>,
}

impl ReadinessGate {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// A gate that is open from the start.
    pub fn ready() -> Self {
        let gate = Self::new();
        gate.mark_ready();
        gate
    }

    pub fn mark_ready(&self) {
        self.tx.send_if_modified(|ready| {
            if *ready {
                false
            } else {
                *ready = true;
                true
            }
        });
    }

    pub fn is_ready(&self) -> bool {
        *self.tx.borrow()
    }

    /// Waits for the gate to open, re-checking on every `policy` tick.
    ///
    /// A cancelled token wins over an open gate.
    pub async fn wait_ready(&self, policy: &RetryPolicy, cancel: &CancellationToken) -> ReadyWait {
        let mut rx = self.tx.subscribe();
        let mut attempts = 0u32;

        loop {
            if cancel.is_cancelled() {
                return ReadyWait::Cancelled;
            }
            attempts = attempts.saturating_add(1);
            if *rx.borrow_and_update() {
                return ReadyWait::Ready { attempts };
            }
            if policy.is_exhausted(attempts) {
                log::warn!("Diagram engine still not ready after {attempts} attempts");
                return ReadyWait::GaveUp { attempts };
            }

            log::debug!(
                "Diagram engine not ready (attempt {attempts}), retrying in {:?}",
                policy.interval
            );

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return ReadyWait::Cancelled,
                // The sender lives in `self`, so `changed` cannot fail here.
                _ = rx.changed() => {}
                _ = tokio::time::sleep(policy.interval) => {}
            }
        }
    }
}

impl Default for ReadinessGate {
    fn default() -> Self {
        Self::new()
    }
}
