//! Trailing-edge debouncing.
//!
//! Unlike [`RateLimiter`](crate::RateLimiter), a [`Debouncer`] keeps the most
//! recent arguments and fires once input has been quiet for the full delay.
//! No timer is spawned; the owner calls [`Debouncer::poll`] from its own loop.

use crate::error::Result;
use crate::throttle::{validate_window, Clock, SystemClock};

pub struct Debouncer<F, A, C = SystemClock> {
    callback: F,
    clock: C,
    delay_millis: f64,
    pending: Option<(A, i64)>,
}

impl<F, A> Debouncer<F, A, SystemClock> {
    pub fn new(callback: F, delay_millis: f64) -> Result<Self> {
        Self::with_clock(callback, delay_millis, SystemClock)
    }
}

impl<F, A, C: Clock> Debouncer<F, A, C> {
    pub fn with_clock(callback: F, delay_millis: f64, clock: C) -> Result<Self> {
        let delay_millis = validate_window("delay_millis", delay_millis)?;
        Ok(Self {
            callback,
            clock,
            delay_millis,
            pending: None,
        })
    }

    /// Replaces any pending arguments and restarts the quiet period.
    pub fn call(&mut self, args: A) {
        let now = self.clock.now_millis();
        if self.pending.is_some() {
            tracing::trace!("debounced call superseded");
        }
        self.pending = Some((args, now));
    }

    /// Fires the pending call if the delay has elapsed since it was made.
    pub fn poll<R>(&mut self) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        let now = self.clock.now_millis();
        let (_, called_at) = self.pending.as_ref()?;
        if (now.saturating_sub(*called_at) as f64) < self.delay_millis {
            return None;
        }
        let (args, _) = self.pending.take()?;
        Some((self.callback)(args))
    }

    /// Drops the pending call without running it.
    pub fn cancel(&mut self) -> Option<A> {
        self.pending.take().map(|(args, _)| args)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay_millis(&self) -> f64 {
        self.delay_millis
    }
}

impl<F, A, C: std::fmt::Debug> std::fmt::Debug for Debouncer<F, A, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("clock", &self.clock)
            .field("delay_millis", &self.delay_millis)
            .field("pending_since", &self.pending.as_ref().map(|(_, at)| *at))
            .finish_non_exhaustive()
    }
}
