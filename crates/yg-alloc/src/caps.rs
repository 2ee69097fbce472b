//! Dense per-class tables.
//!
//! The class set is closed and four entries wide, so caps and allocations are
//! plain arrays indexed by `MoveClass::index()` — no hashing, and iteration
//! order is exactly declaration order, which the round-robin relies on.

use yg_core::{Direction, MoveClass};

// ── ClassCaps ─────────────────────────────────────────────────────────────────

/// Optional per-class truck caps for one hour.
///
/// `None` means uncapped: a class with no configured limit may absorb the
/// whole budget.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassCaps([Option<u32>; MoveClass::COUNT]);

impl ClassCaps {
    /// No class is capped.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Builder-style cap setter.
    pub fn with_cap(mut self, class: MoveClass, cap: u32) -> Self {
        self.0[class.index()] = Some(cap);
        self
    }

    pub fn set(&mut self, class: MoveClass, cap: u32) {
        self.0[class.index()] = Some(cap);
    }

    /// The configured cap, or `None` if the class is uncapped.
    #[inline]
    pub fn get(&self, class: MoveClass) -> Option<u32> {
        self.0[class.index()]
    }

    /// The cap as a plain bound (`u32::MAX` when uncapped).
    #[inline]
    pub fn bound(&self, class: MoveClass) -> u32 {
        self.0[class.index()].unwrap_or(u32::MAX)
    }
}

// ── ClassAlloc ────────────────────────────────────────────────────────────────

/// Slots allocated to each move class for one hour.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassAlloc([u32; MoveClass::COUNT]);

impl ClassAlloc {
    /// All-zero allocation.
    pub fn zero() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, class: MoveClass) -> u32 {
        self.0[class.index()]
    }

    #[inline]
    pub(crate) fn add(&mut self, class: MoveClass, n: u32) {
        self.0[class.index()] += n;
    }

    /// Total slots across all classes.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Total slots across the classes of one direction.
    pub fn direction_total(&self, direction: Direction) -> u32 {
        MoveClass::ALL
            .iter()
            .filter(|c| c.direction() == direction)
            .map(|c| self.get(*c))
            .sum()
    }

    /// Combine two disjoint allocations (e.g. the inbound and outbound halves
    /// of one hour) by per-class addition.
    pub fn merged(mut self, other: ClassAlloc) -> ClassAlloc {
        for c in MoveClass::ALL {
            self.0[c.index()] += other.0[c.index()];
        }
        self
    }

    /// Iterate `(class, count)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (MoveClass, u32)> + '_ {
        MoveClass::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}
