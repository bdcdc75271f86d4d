use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identity of a single tracker run, captured from the arbiter when the
/// run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Incrementing counter deciding which tracker run holds exclusive access
/// to the loading bar. A more recently started run takes ownership
/// immediately; older runs discover they have been dropped the next time
/// they ask.
#[derive(Debug, Clone, Default)]
pub struct TrackerArbiter {
    current: Arc<AtomicU64>,
}

impl TrackerArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new tracker run, superseding all earlier ones.
    pub fn begin(&self) -> Generation {
        Generation(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns true while `generation` is the most recently issued token.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.current.load(Ordering::SeqCst) == generation.0
    }
}
