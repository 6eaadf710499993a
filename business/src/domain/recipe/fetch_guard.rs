use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Single-slot guard over the remote fetch operations.
///
/// Search and load-more share one guard instance: at most one of them may
/// be in flight at a time, and a second caller is rejected immediately
/// rather than queued. The token releases the slot when dropped, so the
/// slot frees on success and on failure alike.
#[derive(Debug, Default)]
pub struct FetchGuard {
    in_flight: AtomicBool,
}

impl FetchGuard {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Claims the fetch slot. Returns `None` when an operation already
    /// holds it.
    pub fn try_begin(self: &Arc<Self>) -> Option<FetchToken> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| FetchToken {
                guard: Arc::clone(self),
            })
    }
}

/// Proof of holding the fetch slot. Dropping it frees the slot.
#[derive(Debug)]
pub struct FetchToken {
    guard: Arc<FetchGuard>,
}

impl Drop for FetchToken {
    fn drop(&mut self) {
        self.guard.in_flight.store(false, Ordering::Release);
    }
}
