//! Deterministic birthday-paradox simulation primitives.
//!
//! A [`SeededRandomStream`] feeds a [`BirthdaySampler`], which fills an
//! [`OccupancyHistogram`]; collisions are buckets holding more than one
//! occupant. [`RateLimiter`] and [`Debouncer`] bound how often high-frequency
//! event callbacks run.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod calendar;
pub mod debounce;
pub mod error;
pub mod rng;
pub mod sampler;
pub mod throttle;

pub use calendar::{day_of_year, map_months, month_spans, MonthSpan, OccupancyTier};
pub use debounce::Debouncer;
pub use error::{Error, Result};
pub use rng::{FnSource, Seed, SeededRandomStream, UnitSource};
pub use sampler::{
    bucket_index, collision_count, generate_distribution, BirthdaySampler, OccupancyHistogram,
};
pub use throttle::{Clock, ManualClock, RateLimiter, SystemClock, ThrottleStats};
