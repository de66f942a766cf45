//! Non-leap-year calendar layout for 365-bucket histograms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Month names and lengths. Leap years are not modelled.
pub const MONTHS: [(&str, u32); 12] = [
    ("January", 31),
    ("February", 28),
    ("March", 31),
    ("April", 30),
    ("May", 31),
    ("June", 30),
    ("July", 31),
    ("August", 31),
    ("September", 30),
    ("October", 31),
    ("November", 30),
    ("December", 31),
];

pub const DAYS_IN_YEAR: usize = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MonthSpan {
    pub name: &'static str,
    pub days: u32,
    /// 0-based day of year of the 1st.
    pub starting_day: u32,
}

impl MonthSpan {
    /// Bucket indices covered by this month.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self.starting_day as usize;
        start..start + self.days as usize
    }
}

pub fn month_spans() -> impl Iterator<Item = MonthSpan> {
    MONTHS.iter().scan(0_u32, |starting_day, &(name, days)| {
        let span = MonthSpan {
            name,
            days,
            starting_day: *starting_day,
        };
        *starting_day += days;
        Some(span)
    })
}

/// Calls `f(name, days, starting_day)` once per month, in calendar order.
pub fn map_months<T>(mut f: impl FnMut(&'static str, u32, u32) -> T) -> Vec<T> {
    month_spans()
        .map(|span| f(span.name, span.days, span.starting_day))
        .collect()
}

/// Month and 1-based day of month for a 0-based day-of-year index.
pub fn day_of_year(index: usize) -> Option<(MonthSpan, u32)> {
    month_spans()
        .find(|span| span.range().contains(&index))
        .map(|span| (span, (index - span.starting_day as usize) as u32 + 1))
}

/// Display tier for a day's occupancy. Counts above five share the top tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OccupancyTier {
    Empty,
    Single,
    Pair,
    Triple,
    Quadruple,
    Saturated,
}

impl OccupancyTier {
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Self::Empty,
            1 => Self::Single,
            2 => Self::Pair,
            3 => Self::Triple,
            4 => Self::Quadruple,
            _ => Self::Saturated,
        }
    }

    pub fn is_collision(self) -> bool {
        self >= Self::Pair
    }

    /// One-character glyph used by text renderers.
    pub fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Single => 'o',
            Self::Pair => '2',
            Self::Triple => '3',
            Self::Quadruple => '4',
            Self::Saturated => '#',
        }
    }
}
