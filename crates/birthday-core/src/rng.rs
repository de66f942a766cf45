//! Seeded random streams.
//!
//! This is intentionally small. It is **not** cryptographic and must not be used where
//! unpredictability matters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
const LCG_MODULUS: f64 = 4_294_967_296.0; // 2^32

/// Identity of a reproducible run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Seed(pub i64);

impl Seed {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Wall-clock milliseconds since the Unix epoch.
    pub fn from_clock() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }

    /// The seed after one reroll.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A source of floating-point values in `[0, 1)`.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

impl<S: UnitSource + ?Sized> UnitSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapts a closure into a [`UnitSource`].
///
/// The closure is trusted to stay in `[0, 1)`; consumers clamp anything outside.
pub struct FnSource<F>(pub F);

impl<F: FnMut() -> f64> UnitSource for FnSource<F> {
    fn next_unit(&mut self) -> f64 {
        (self.0)()
    }
}

/// Linear congruential generator over `u32` state.
///
/// `state = (1664525 * state + 1013904223) mod 2^32`, value = `state / 2^32`.
/// Every draw takes `&mut self`; share across threads only behind a lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededRandomStream {
    seed: Seed,
    state: u32,
}

impl SeededRandomStream {
    /// Any seed is accepted. Only `seed mod 2^32` affects the sequence, so the
    /// state is reduced up front (Euclidean, negative seeds included).
    pub fn new(seed: i64) -> Self {
        Self::from(Seed(seed))
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advances the recurrence and returns the new state.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }
}

impl From<Seed> for SeededRandomStream {
    fn from(seed: Seed) -> Self {
        Self {
            seed,
            state: seed.0.rem_euclid(1 << 32) as u32,
        }
    }
}

impl UnitSource for SeededRandomStream {
    fn next_unit(&mut self) -> f64 {
        // u32 / 2^32 is exact in f64 and strictly below 1.
        f64::from(self.next_u32()) / LCG_MODULUS
    }
}
