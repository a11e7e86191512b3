// Debouncer - schedule at T+delay from the last input, cancel the previous schedule
//
// Each call to schedule() aborts whatever was pending and spawns a fresh
// sleep task that delivers the value over the channel when it wakes.
// Only one delayed delivery can ever be pending.
//
// Abort is not a guarantee that the old value was never sent: a timer that
// already fired may have queued its value. Callers that care tag values with
// a generation number and drop stale ones on receipt (the session does).

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Delays delivery of a value until no newer value arrived for `delay`
pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer that delivers to `tx`
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<T>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Replace any pending delivery with `value`, due `delay` from now
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, value: T) {
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the UI shut down - nothing to deliver to
            let _ = tx.send(value);
        }));
    }

    /// Drop the pending delivery, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a delivery is scheduled and has not fired yet
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Configured quiet period
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
