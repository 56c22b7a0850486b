//! Hook behind the composer's "API" chip.
//!
//! There is no external data source yet. The hook is injected into the view
//! so a real integration can replace [`NoopFetch`] without touching the chat
//! core.

/// Collaborator invoked when the user triggers "fetch from API".
pub trait FetchHook: Send + Sync {
    fn fetch(&self);
}

/// Default hook: logs the trigger and does nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFetch;

impl FetchHook for NoopFetch {
    fn fetch(&self) {
        tracing::debug!("fetch from API triggered");
    }
}
