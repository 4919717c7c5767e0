//! Commit-time source shared by all observers
//!
//! Timeout eligibility is measured against an externally agreed notion of
//! "now" that is monotonically nondecreasing and identical for every party.
//! No engine API accepts a caller-supplied timestamp: a claimant who could
//! pick its own clock could forge eligibility.

use std::sync::atomic::{AtomicU64, Ordering};

/// A monotonic commit-time source, in whole seconds since the Unix epoch.
pub trait CommitClock: Send + Sync {
    /// Current commit time.
    fn now(&self) -> u64;
}

/// Wall-clock implementation for hosts whose call serialization already
/// yields a consistent view of time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl CommitClock for SystemClock {
    fn now(&self) -> u64 {
        chrono::Utc::now().timestamp().max(0) as u64
    }
}

/// Externally driven clock for ledger-style hosts and deterministic tests.
///
/// The host advances it as commits land; attempts to move it backwards are
/// ignored, keeping the invariant that observers never disagree on elapsed
/// time.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self {
            now: AtomicU64::new(start),
        }
    }

    /// Advance the clock by `secs`.
    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }

    /// Move the clock to `instant`, never backwards.
    pub fn set(&self, instant: u64) {
        self.now.fetch_max(instant, Ordering::SeqCst);
    }
}

impl CommitClock for ManualClock {
    fn now(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}
