//! Birthday distribution sampling.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rng::UnitSource;

/// Occupancy count per bucket (day).
///
/// The length is fixed at construction. The sum of all counts always equals the
/// number of recorded draws.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u32>", into = "Vec<u32>"))]
pub struct OccupancyHistogram {
    counts: Vec<u32>,
}

impl OccupancyHistogram {
    pub fn new(buckets: usize) -> Result<Self> {
        if buckets == 0 {
            return Err(Error::invalid("buckets", "must be at least 1"));
        }
        Ok(Self {
            counts: vec![0; buckets],
        })
    }

    /// Adds one occupant to `index`.
    pub fn record(&mut self, index: usize) -> Result<()> {
        let len = self.counts.len();
        let slot = self.counts.get_mut(index).ok_or_else(|| {
            Error::invalid("index", format!("{index} is outside 0..{len}"))
        })?;
        *slot = slot.checked_add(1).ok_or_else(|| {
            Error::invalid("index", format!("bucket {index} is already at u32::MAX"))
        })?;
        Ok(())
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        self.counts.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always false; a histogram has at least one bucket.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of draws recorded so far.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Buckets holding more than one occupant.
    pub fn collisions(&self) -> usize {
        collision_count(&self.counts)
    }

    pub fn max_occupancy(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn into_counts(self) -> Vec<u32> {
        self.counts
    }
}

impl TryFrom<Vec<u32>> for OccupancyHistogram {
    type Error = Error;

    fn try_from(counts: Vec<u32>) -> Result<Self> {
        if counts.is_empty() {
            return Err(Error::invalid("buckets", "must be at least 1"));
        }
        Ok(Self { counts })
    }
}

impl From<OccupancyHistogram> for Vec<u32> {
    fn from(histogram: OccupancyHistogram) -> Self {
        histogram.counts
    }
}

/// Counts buckets whose value is strictly greater than 1.
pub fn collision_count(counts: &[u32]) -> usize {
    counts.iter().filter(|&&c| c > 1).count()
}

/// Maps a unit value onto `0..buckets` as `floor(v * buckets)`.
///
/// The result is clamped to the last bucket; negative and NaN inputs land in
/// bucket 0. `buckets` must be non-zero.
pub fn bucket_index(value: f64, buckets: usize) -> usize {
    debug_assert!(buckets > 0);
    // `as` saturates: NaN and negatives become 0.
    let raw = (value * buckets as f64).floor() as usize;
    raw.min(buckets - 1)
}

/// Assigns each of `population` people a uniformly random bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdaySampler {
    population: usize,
    buckets: usize,
}

impl BirthdaySampler {
    /// `population` is capped at `u32::MAX` so no bucket counter can overflow.
    pub fn new(population: usize, buckets: usize) -> Result<Self> {
        if buckets == 0 {
            return Err(Error::invalid("buckets", "must be at least 1"));
        }
        if u32::try_from(population).is_err() {
            return Err(Error::invalid(
                "population",
                format!("{population} exceeds {}", u32::MAX),
            ));
        }
        Ok(Self {
            population,
            buckets,
        })
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn buckets(&self) -> usize {
        self.buckets
    }

    /// Draws exactly `population` values from `source`.
    pub fn sample<S: UnitSource + ?Sized>(&self, source: &mut S) -> OccupancyHistogram {
        let mut counts = vec![0_u32; self.buckets];
        for _ in 0..self.population {
            counts[bucket_index(source.next_unit(), self.buckets)] += 1;
        }
        let histogram = OccupancyHistogram { counts };

        tracing::debug!(
            population = self.population,
            buckets = self.buckets,
            collisions = histogram.collisions(),
            "sampled birthday distribution"
        );

        histogram
    }
}

/// Builds a sampler and runs it once.
pub fn generate_distribution<S: UnitSource + ?Sized>(
    population: usize,
    buckets: usize,
    source: &mut S,
) -> Result<OccupancyHistogram> {
    Ok(BirthdaySampler::new(population, buckets)?.sample(source))
}
