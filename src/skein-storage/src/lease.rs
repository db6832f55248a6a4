//! Handle lease accounting.

use std::fmt;

use common_error::{SkeinError, SkeinResult};
use log::trace;
use parking_lot::Mutex;

/// Snapshot of a ledger's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaseStats {
    /// Handles handed out since creation.
    pub acquired: usize,
    /// Handles given back since creation.
    pub released: usize,
    /// Handles currently outstanding.
    pub open: usize,
    /// Highest number of simultaneously outstanding handles.
    pub peak_open: usize,
}

impl LeaseStats {
    /// Every acquired handle has been released.
    pub fn is_balanced(&self) -> bool {
        self.open == 0 && self.acquired == self.released
    }
}

/// Counts handle acquisitions and releases, optionally enforcing a budget
/// of simultaneously open handles.
#[derive(Default)]
pub struct LeaseLedger {
    limit: Option<usize>,
    stats: Mutex<LeaseStats>,
}

impl LeaseLedger {
    /// Create a ledger without a budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger that refuses more than `limit` open handles.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            stats: Mutex::new(LeaseStats::default()),
        }
    }

    /// The open-handle budget, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Take out a lease; it is returned to the ledger when dropped.
    pub fn acquire(&self, what: impl fmt::Display) -> SkeinResult<Lease<'_>> {
        let mut stats = self.stats.lock();
        if let Some(limit) = self.limit {
            if stats.open >= limit {
                return Err(SkeinError::resource_exhausted(format!(
                    "cannot open {what}: {limit} handles already open"
                )));
            }
        }
        stats.acquired += 1;
        stats.open += 1;
        stats.peak_open = stats.peak_open.max(stats.open);
        trace!("acquired {what} ({} open)", stats.open);
        Ok(Lease { ledger: self })
    }

    /// Current counters.
    pub fn stats(&self) -> LeaseStats {
        *self.stats.lock()
    }

    fn release(&self) {
        let mut stats = self.stats.lock();
        stats.released += 1;
        stats.open = stats.open.saturating_sub(1);
    }
}

impl fmt::Debug for LeaseLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeaseLedger")
            .field("limit", &self.limit)
            .field("stats", &self.stats())
            .finish()
    }
}

/// An outstanding lease. Dropping it releases the handle.
#[must_use = "dropping a lease releases it immediately"]
pub struct Lease<'a> {
    ledger: &'a LeaseLedger,
}

impl Drop for Lease<'_> {
    fn drop(&mut self) {
        self.ledger.release();
    }
}

impl fmt::Debug for Lease<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lease").finish_non_exhaustive()
    }
}
