// Puzzle identifiers.
// A (year, day) pair from which both the remote locator and the cache path are derived.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};

use crate::error::{AocError, Result};

/// Last day of any event.
pub const MAX_DAY: u32 = 25;

/// Puzzles unlock at midnight US-Eastern, which is 05:00 UTC in December.
const UNLOCK_HOUR_UTC: u32 = 5;

/// Identifies one day's puzzle input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PuzzleId {
    year: i32,
    day: u32,
}

impl PuzzleId {
    /// Create an identifier, rejecting days outside 1..=25.
    pub fn new(year: i32, day: u32) -> Result<Self> {
        if !(1..=MAX_DAY).contains(&day) {
            return Err(AocError::InvalidDay(day));
        }
        Ok(Self { year, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// When this day's input becomes available.
    pub fn unlocks_at(&self) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(self.year, 12, self.day, UNLOCK_HOUR_UTC, 0, 0)
            .single()
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {:02}", self.year, self.day)
    }
}
