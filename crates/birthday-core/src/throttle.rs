//! Call-rate limiting for high-frequency event callbacks.
//!
//! [`RateLimiter`] lets at most one call through per window and silently drops
//! the rest. Nothing is queued and no timer is scheduled: each call reads the
//! clock once and compares it with the last accepted call.

use std::cell::Cell;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Millisecond timestamps.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall-clock time since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Settable clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn new(start_millis: i64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_millis)),
        }
    }

    pub fn set(&self, millis: i64) {
        self.now.set(millis);
    }

    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get().saturating_add(millis));
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

pub(crate) fn validate_window(name: &'static str, millis: f64) -> Result<f64> {
    if !millis.is_finite() {
        return Err(Error::invalid(name, format!("{millis} is not a finite duration")));
    }
    if millis < 0.0 {
        return Err(Error::invalid(name, format!("{millis} is negative")));
    }
    Ok(millis)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThrottleStats {
    pub accepted: u64,
    pub dropped: u64,
}

/// Wraps `callback` so it runs at most once per `window_millis`.
///
/// Arguments are passed as a single value; use a tuple for several. A window of
/// zero lets every call through.
pub struct RateLimiter<F, C = SystemClock> {
    callback: F,
    clock: C,
    window_millis: f64,
    last_accepted: Option<i64>,
    stats: ThrottleStats,
}

impl<F> RateLimiter<F, SystemClock> {
    pub fn new(callback: F, window_millis: f64) -> Result<Self> {
        Self::with_clock(callback, window_millis, SystemClock)
    }
}

impl<F, C: Clock> RateLimiter<F, C> {
    pub fn with_clock(callback: F, window_millis: f64, clock: C) -> Result<Self> {
        let window_millis = validate_window("window_millis", window_millis)?;
        Ok(Self {
            callback,
            clock,
            window_millis,
            last_accepted: None,
            stats: ThrottleStats::default(),
        })
    }

    /// Invokes the callback if the window since the last accepted call has
    /// elapsed, otherwise drops the call and returns `None`.
    pub fn call<A, R>(&mut self, args: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        let now = self.clock.now_millis();
        if let Some(last) = self.last_accepted {
            let elapsed = now.saturating_sub(last) as f64;
            if elapsed < self.window_millis {
                self.stats.dropped += 1;
                tracing::trace!(elapsed, window = self.window_millis, "throttled call dropped");
                return None;
            }
        }

        let result = (self.callback)(args);
        self.last_accepted = Some(now);
        self.stats.accepted += 1;
        Some(result)
    }

    /// Forgets the last accepted call; the next call always runs.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }

    pub fn window_millis(&self) -> f64 {
        self.window_millis
    }

    pub fn last_accepted(&self) -> Option<i64> {
        self.last_accepted
    }

    pub fn stats(&self) -> ThrottleStats {
        self.stats
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<F, C: std::fmt::Debug> std::fmt::Debug for RateLimiter<F, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("clock", &self.clock)
            .field("window_millis", &self.window_millis)
            .field("last_accepted", &self.last_accepted)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
