//! The hour-aligned time model.
//!
//! # Design
//!
//! Every lookup the engine consumes is keyed by the hour, so time is
//! represented as a monotonically increasing `HourStamp` counter:
//!
//!   wall_time = stamp * 3600 seconds since the Unix epoch
//!
//! Using an integer hour as the canonical time unit means all horizon
//! arithmetic is exact (no floating-point drift, no DST surprises) and map
//! keys hash/compare in O(1).  Callers holding wall-clock timestamps convert
//! with [`HourStamp::from_unix_secs`], which floors to the hour boundary.

use std::fmt;

/// Seconds in one hour.
pub const HOUR_SECS: i64 = 3_600;

// ── HourStamp ─────────────────────────────────────────────────────────────────

/// An absolute hour: hours elapsed since the Unix epoch.
///
/// Stored as `i64` so pre-epoch timestamps and subtraction both behave; at
/// one unit per hour an i64 outlasts any conceivable planning horizon.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourStamp(pub i64);

impl HourStamp {
    pub const ZERO: HourStamp = HourStamp(0);

    /// Floor a Unix timestamp (seconds) to its containing hour.
    #[inline]
    pub fn from_unix_secs(secs: i64) -> HourStamp {
        HourStamp(secs.div_euclid(HOUR_SECS))
    }

    /// Unix timestamp (seconds) of this hour's start.
    #[inline]
    pub fn unix_secs(self) -> i64 {
        self.0 * HOUR_SECS
    }

    /// The following hour.
    #[inline]
    pub fn next(self) -> HourStamp {
        HourStamp(self.0 + 1)
    }

    /// The hour `n` steps after `self` (negative `n` steps back).
    #[inline]
    pub fn offset(self, n: i64) -> HourStamp {
        HourStamp(self.0 + n)
    }
}

impl std::ops::Add<i64> for HourStamp {
    type Output = HourStamp;
    #[inline]
    fn add(self, rhs: i64) -> HourStamp {
        HourStamp(self.0 + rhs)
    }
}

impl std::ops::Sub for HourStamp {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: HourStamp) -> i64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for HourStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.0)
    }
}

// ── Horizon ───────────────────────────────────────────────────────────────────

/// An inclusive range of hours, iterated in chronological order.
///
/// `start > end` is not an error — the horizon is simply empty.  This mirrors
/// how the engine treats every other irregular input: degrade to a no-op
/// rather than fail.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Horizon {
    /// First hour processed (inclusive).
    pub start: HourStamp,
    /// Last hour processed (inclusive).
    pub end: HourStamp,
}

impl Horizon {
    pub fn new(start: HourStamp, end: HourStamp) -> Self {
        Self { start, end }
    }

    /// Iterate every hour from `start` to `end` inclusive.
    pub fn hours(self) -> impl Iterator<Item = HourStamp> {
        (self.start.0..=self.end.0).map(HourStamp)
    }

    /// Number of hours in the horizon (0 when `start > end`).
    #[inline]
    pub fn len(self) -> usize {
        (self.end.0 - self.start.0 + 1).max(0) as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.start > self.end
    }

    #[inline]
    pub fn contains(self, hour: HourStamp) -> bool {
        self.start <= hour && hour <= self.end
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
