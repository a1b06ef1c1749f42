//! Injectable clock for entity timestamps.
//!
//! Production code stamps entities with [`SystemClock`]; tests swap in a
//! [`ManualClock`] so `created_at`/`updated_at` are deterministic.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of "now" for timestamping entities.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Returns the current wall-clock time.
    fn now(&self) -> SystemTime;
}

/// Shared clock handle held by the tree.
pub type SharedClock = Arc<dyn Clock>;

/// Real wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a shared `SystemClock`.
    pub fn shared() -> SharedClock {
        Arc::new(Self)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A clock that only moves when told to.
///
/// Time is kept as milliseconds since the Unix epoch.
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: AtomicU64,
}

impl ManualClock {
    /// Creates a clock fixed at `start_millis` after the Unix epoch.
    pub fn new(start_millis: u64) -> Self {
        Self {
            millis: AtomicU64::new(start_millis),
        }
    }

    /// Creates a shared `ManualClock`, keeping a typed handle for the test.
    pub fn shared(start_millis: u64) -> Arc<Self> {
        Arc::new(Self::new(start_millis))
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let delta = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }

    /// Sets the clock to `millis` after the Unix epoch.
    pub fn set(&self, millis: u64) {
        self.millis.store(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_millis(self.millis.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_starts_at_given_time() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.now(), UNIX_EPOCH + Duration::from_millis(1_000));
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(0);
        clock.advance(Duration::from_secs(2));
        assert_eq!(clock.now(), UNIX_EPOCH + Duration::from_secs(2));
    }

    #[test]
    fn manual_clock_set_overrides() {
        let clock = ManualClock::new(500);
        clock.set(42);
        assert_eq!(clock.now(), UNIX_EPOCH + Duration::from_millis(42));
    }

    #[test]
    fn system_clock_is_after_epoch() {
        assert!(SystemClock.now() > UNIX_EPOCH);
    }

    #[test]
    fn shared_manual_clock_coerces_to_shared_clock() {
        let manual = ManualClock::shared(10);
        let shared: SharedClock = manual.clone();
        manual.advance(Duration::from_millis(5));
        assert_eq!(shared.now(), UNIX_EPOCH + Duration::from_millis(15));
    }
}
