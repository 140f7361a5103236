//! Domain service for the greeter
//!
//! Contains the core business logic of the demo application.

use std::sync::Arc;

use tracing::debug;

use super::arithmetic;
use super::clock::{Clock, MonotonicClock, SystemClock};
use super::welcome;

/// Domain service that performs the greeting and arithmetic operations.
///
/// Apart from the clock it holds no state, so a single instance can be
/// shared freely between threads.
#[derive(Clone)]
pub struct Service {
    clock: Arc<dyn Clock>,
}

impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Service").finish_non_exhaustive()
    }
}

impl Service {
    /// Create a new service backed by a monotonic system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(MonotonicClock::new(SystemClock)))
    }

    /// Create a new service that reads time from `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Build a welcome message, falling back to the guest greeting for blank names.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn format_welcome(&self, name: Option<&str>) -> String {
        debug!(name, "formatting welcome message");
        welcome::format_welcome(name)
    }

    /// Add two numbers and return the sum.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn sum(&self, a: i64, b: i64) -> i64 {
        debug!(a, b, "performing addition");
        arithmetic::sum(a, b)
    }

    /// Check whether a number is even.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn is_even(&self, n: i64) -> bool {
        debug!(n, "checking parity");
        arithmetic::is_even(n)
    }

    /// Current time in milliseconds since the Unix epoch.
    #[must_use]
    pub fn current_timestamp_millis(&self) -> i64 {
        self.clock.now_millis()
    }
}
