//! Reference-counted page scroll lock.
//!
//! Every overlay that needs the page frozen holds a [`ScrollLockGuard`]. The
//! page is locked while at least one guard is alive, so overlapping overlays
//! cannot release each other's lock.

use std::cell::Cell;
use std::rc::Rc;
use tracing::info;

/// Shared lock handle. Clones refer to the same lock.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    /// Unlocked lock with no holders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a hold on the lock. The page locks on the first hold.
    pub fn acquire(&self) -> ScrollLockGuard {
        let before = self.holders.get();
        self.holders.set(before + 1);
        if before == 0 {
            info!("page scroll locked");
        }
        ScrollLockGuard {
            holders: Rc::clone(&self.holders),
        }
    }

    /// Whether at least one guard is alive.
    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    /// Number of live guards.
    pub fn holders(&self) -> usize {
        self.holders.get()
    }
}

/// One hold on a [`ScrollLock`]. Dropping it releases the hold.
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Rc<Cell<usize>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let after = self.holders.get().saturating_sub(1);
        self.holders.set(after);
        if after == 0 {
            info!("page scroll unlocked");
        }
    }
}
