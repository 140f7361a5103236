//! Clock abstraction for millisecond timestamps.
//!
//! [`SystemClock`] reads the host wall clock. [`MonotonicClock`] wraps any
//! clock and never goes backwards, which keeps sequential readings ordered
//! even when the wall clock is stepped back (NTP adjustments and the like).

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Source of timestamps in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since 1970-01-01T00:00:00Z.
    fn now_millis(&self) -> i64;
}

/// Host wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock adapter that never returns a value lower than one it already returned.
#[derive(Debug)]
pub struct MonotonicClock<C> {
    inner: C,
    high_water: AtomicI64,
}

impl<C: Clock> MonotonicClock<C> {
    /// Wrap `inner`.
    pub const fn new(inner: C) -> Self {
        Self {
            inner,
            high_water: AtomicI64::new(i64::MIN),
        }
    }
}

impl<C: Clock> Clock for MonotonicClock<C> {
    fn now_millis(&self) -> i64 {
        let now = self.inner.now_millis();
        let previous = self.high_water.fetch_max(now, Ordering::AcqRel);
        previous.max(now)
    }
}

static PROCESS_CLOCK: MonotonicClock<SystemClock> = MonotonicClock::new(SystemClock);

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// Sequential calls within one process never decrease.
#[must_use]
pub fn current_timestamp_millis() -> i64 {
    PROCESS_CLOCK.now_millis()
}
