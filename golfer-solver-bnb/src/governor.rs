//! Bounded admission of concurrently running search branches.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Caps the number of branches running on spawned threads.
///
/// A branch that cannot reserve a slot runs inline on the caller's thread, so
/// the search always makes progress. A limit of zero disables spawning.
///
/// # Examples
///
/// ```
/// use golfer_solver_bnb::ConcurrencyGovernor;
///
/// let governor = ConcurrencyGovernor::new(1);
/// let slot = governor.try_acquire();
/// assert!(slot.is_some());
/// assert!(governor.try_acquire().is_none());
/// drop(slot);
/// assert!(governor.has_capacity());
/// ```
#[derive(Debug)]
pub struct ConcurrencyGovernor {
    limit: usize,
    active: AtomicUsize,
}

impl ConcurrencyGovernor {
    /// Create a governor admitting at most `limit` concurrent branches.
    pub const fn new(limit: usize) -> Self {
        Self {
            limit,
            active: AtomicUsize::new(0),
        }
    }

    /// Maximum number of concurrent branches.
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Number of slots currently held.
    pub fn active(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }

    /// Whether a slot is free at the moment of the call.
    ///
    /// The answer may be stale by the time a caller acts on it; use
    /// [`try_acquire`](Self::try_acquire) to actually reserve a slot.
    pub fn has_capacity(&self) -> bool {
        self.active() < self.limit
    }

    /// Reserve a slot, or return `None` when all slots are taken.
    pub fn try_acquire(&self) -> Option<SlotGuard<'_>> {
        self.active
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |active| {
                (active < self.limit).then_some(active + 1)
            })
            .ok()
            .map(|_| SlotGuard { governor: self })
    }
}

/// A reserved slot, released when dropped.
#[derive(Debug)]
#[must_use = "the slot is released as soon as the guard is dropped"]
pub struct SlotGuard<'a> {
    governor: &'a ConcurrencyGovernor,
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        self.governor.active.fetch_sub(1, Ordering::AcqRel);
    }
}
