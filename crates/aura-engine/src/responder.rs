//! Simulated assistant replies.
//!
//! Every accepted send schedules one deferred reply. A reply task sleeps for
//! the configured delay, picks a canned response and hands it back over a
//! channel; the owner of the conversation log drains the channel and appends.
//! Reply tasks never touch the log themselves.

use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// The fixed set of replies the simulated assistant chooses from.
pub const CANNED_RESPONSES: [&str; 5] = [
    "I understand. Let me help you with that.",
    "That's an interesting question. Here's what I think...",
    "Based on your input, I can provide the following insights.",
    "Great! I'm processing your request now.",
    "I see what you mean. Let me elaborate on that.",
];

/// Delay between a send and the simulated reply.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// Source of the response choice.
pub trait ResponsePicker: Send + Sync {
    /// Return an index in `0..count`.
    fn pick(&self, count: usize) -> usize;
}

/// Uniformly random choice backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl ResponsePicker for RandomPicker {
    fn pick(&self, count: usize) -> usize {
        rand::rng().random_range(0..count)
    }
}

/// Always picks the same index (clamped to the range). Deterministic runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl ResponsePicker for FixedPicker {
    fn pick(&self, count: usize) -> usize {
        self.0.min(count.saturating_sub(1))
    }
}

/// A reply that has fired and is waiting to be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Order in which the reply was scheduled.
    pub seq: u64,
    /// Chosen response text.
    pub text: String,
}

/// Schedules and tracks deferred replies.
pub struct ResponseSimulator {
    delay: Duration,
    picker: Arc<dyn ResponsePicker>,
    tx: mpsc::UnboundedSender<Reply>,
    rx: mpsc::UnboundedReceiver<Reply>,
    pending: Vec<(u64, JoinHandle<()>)>,
    next_seq: u64,
}

impl std::fmt::Debug for ResponseSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseSimulator")
            .field("delay", &self.delay)
            .field("pending", &self.pending.len())
            .field("next_seq", &self.next_seq)
            .finish_non_exhaustive()
    }
}

impl ResponseSimulator {
    /// Create a simulator with a random picker.
    pub fn new(delay: Duration) -> Self {
        Self::with_picker(delay, Arc::new(RandomPicker))
    }

    /// Create a simulator with an injected picker.
    pub fn with_picker(delay: Duration, picker: Arc<dyn ResponsePicker>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            delay,
            picker,
            tx,
            rx,
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule one reply. Must be called from within a tokio runtime.
    pub fn schedule(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;

        let delay = self.delay;
        let picker = Arc::clone(&self.picker);
        let tx = self.tx.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let index = picker.pick(CANNED_RESPONSES.len());
            let text = CANNED_RESPONSES[index.min(CANNED_RESPONSES.len() - 1)].to_string();
            // The receiver lives as long as the simulator; a send error means
            // it was dropped and the reply has nowhere to go.
            let _ = tx.send(Reply { seq, text });
        });

        tracing::debug!(seq, delay_ms = delay.as_millis(), "Scheduled reply");
        self.pending.push((seq, handle));
        seq
    }

    /// Number of scheduled replies not yet handed out.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Collect every reply that has already fired, in scheduling order.
    pub fn poll(&mut self) -> Vec<Reply> {
        let mut ready = Vec::new();
        while let Ok(reply) = self.rx.try_recv() {
            ready.push(reply);
        }
        ready.sort_by_key(|r| r.seq);
        for reply in &ready {
            self.forget(reply.seq);
        }
        ready
    }

    /// Wait for the next reply. Returns `None` when nothing is pending.
    pub async fn next(&mut self) -> Option<Reply> {
        if self.pending.is_empty() {
            return None;
        }
        let reply = self.rx.recv().await?;
        self.forget(reply.seq);
        Some(reply)
    }

    /// Abort every outstanding reply and discard any that already fired.
    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!(count = self.pending.len(), "Cancelling pending replies");
        }
        for (_, handle) in self.pending.drain(..) {
            handle.abort();
        }
        while self.rx.try_recv().is_ok() {}
    }

    fn forget(&mut self, seq: u64) {
        self.pending.retain(|(s, _)| *s != seq);
    }
}

impl Drop for ResponseSimulator {
    fn drop(&mut self) {
        for (_, handle) in self.pending.drain(..) {
            handle.abort();
        }
    }
}
