//! Per-mount liveness and refresh gating for `ProtectedRoute`.
//!
//! CONCURRENCY
//! ===========
//! The profile check and the refresh timer are independent tasks on the
//! browser event loop. Both consult this handle before acting so that:
//! - a check resolving after unmount or after a reload was scheduled is
//!   discarded instead of re-enabling access;
//! - the refresh loop stops once the route unmounts;
//! - at most one reload is scheduled per mount.
//!
//! Flags are atomics so the handle can move into `on_cleanup`, which requires
//! `Send + Sync`.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct GuardLifecycle {
    mounted: Arc<AtomicBool>,
    refreshing: Arc<AtomicBool>,
}

impl Default for GuardLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl GuardLifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self { mounted: Arc::new(AtomicBool::new(true)), refreshing: Arc::new(AtomicBool::new(false)) }
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.refreshing.load(Ordering::Relaxed)
    }

    /// Claim the single refresh slot. Fails when unmounted or already claimed.
    #[must_use]
    pub fn begin_refresh(&self) -> bool {
        self.is_mounted()
            && self
                .refreshing
                .compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed)
                .is_ok()
    }

    /// Whether a finished session check may still update guard state.
    #[must_use]
    pub fn accepts_check_result(&self) -> bool {
        self.is_mounted() && !self.is_refreshing()
    }
}
